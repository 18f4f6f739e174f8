pub mod aggregate;

pub use aggregate::{TitleId, TitleListItem, TitleReference, TitleState};
