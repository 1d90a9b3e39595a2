pub mod carousel;
pub mod contact;
pub mod debounce;
pub mod landing_view;
pub mod provider_search;
pub mod sessions;
pub mod suggestions;
