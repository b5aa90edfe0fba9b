//! Catalog data types managed by the stores.

pub mod category;
pub mod product;

pub use category::*;
pub use product::*;
