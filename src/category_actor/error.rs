//! Error types for the Category store.

use crate::model::CategoryName;
use thiserror::Error;

/// Errors that can occur during category operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    /// A category with this name already exists.
    #[error("Category already exists: {0}")]
    DuplicateKey(CategoryName),

    /// The category name is empty or only whitespace.
    #[error("Category name must not be empty")]
    InvalidName,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
