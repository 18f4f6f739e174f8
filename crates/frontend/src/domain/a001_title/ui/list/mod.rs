//! Addons Title List UI Module
//!
//! - filter.rs: filter engine over the loaded snapshot
//! - fields.rs: filter form field descriptors
//! - model.rs: API functions
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

pub mod fields;
pub mod filter;
mod model;
mod view;
mod view_model;

pub use view::AddonsTitleList;
pub use view_model::AddonsTitleListVm;
