pub mod form;

pub use form::{fields, CollectionEntry, CreateProductFormData};
