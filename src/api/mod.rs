//! Song catalog data and the loader that fetches it.

pub mod catalog;
pub mod models;

pub use catalog::*;
pub use models::*;
