pub mod form_store;

pub use form_store::{use_form_store, FormState, FormStore};
