//! Error types for the Product store.

use crate::model::{CategoryName, ProductId};
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// No product has this id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The product refers to a category that does not exist.
    #[error("Category does not exist: {0}")]
    InvalidReference(CategoryName),

    /// The product name is empty or only whitespace.
    #[error("Product name must not be empty")]
    InvalidName,

    /// The price is negative, NaN or infinite.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
