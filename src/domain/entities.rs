pub mod login;
pub mod search;
pub mod service_provider;
pub mod view;
