//! Формы: значения полей с проверкой, описания полей и их отображение

pub mod field_set;
pub mod form_values;
pub mod view;

pub use field_set::{FieldAction, FieldConfig, FieldDescriptor, FieldStrategy, FieldStyle, Hint, SelectOption};
pub use form_values::{FormValues, Rule};
pub use view::FieldSet;
