//! Create Product UI Module (collections block)
//!
//! - collection.rs: buckets of selected titles and their sync into the form
//! - fields.rs: field descriptors of every collection group
//! - model.rs: API functions
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos components (pure UI)

pub mod collection;
pub mod fields;
mod model;
mod view;
mod view_model;

pub use view::{CreateProductCollection, CreateProductDetails};
pub use view_model::CreateProductCollectionVm;
