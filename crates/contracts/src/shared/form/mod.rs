//! Модель данных конструктора форм: описания полей, введённые значения
//! и запись сохранённой формы.

pub mod field;
pub mod saved_form;
pub mod value;

pub use field::{FieldId, FormField};
pub use saved_form::{value_map, SavedForm};
pub use value::{FieldValue, ValueMap, ValueUpdate};
