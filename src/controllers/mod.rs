//! Type-safe controllers wrapping the generic [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Controllers hold no state beyond the channel to their store. They translate runtime
//! errors into the domain errors callers branch on.

pub mod category_controller;
pub mod product_controller;

pub use category_controller::*;
pub use product_controller::*;
