pub mod home;
pub mod json_error;
pub mod login;
pub mod providers;
pub mod sessions;
pub mod system;
