pub mod form_builder;
pub mod form_preview;
pub mod home;
pub mod not_found;
