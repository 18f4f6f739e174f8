pub mod a001_title;
pub mod a002_product;
pub mod common;
