//! # Category Store
//!
//! The category store keeps the bakery's categories keyed by name. It has no dependencies
//! (`Context = ()`) and no filters; it exists to enforce name uniqueness and to answer
//! lookups from the product store.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Category`]
//! - [`error`] - [`CategoryError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and its controller
//!
//! ## Usage
//!
//! ```rust
//! use padaria::category_actor;
//! use padaria::model::CategoryCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (store, controller) = category_actor::new(32);
//!     tokio::spawn(store.run(()));
//!
//!     controller
//!         .create_category(CategoryCreate::new("Pães", "Pães frescos e artesanais"))
//!         .await?;
//!     assert_eq!(controller.get_all_categories().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::controllers::CategoryController;
use crate::framework::ResourceActor;
use crate::model::{Category, CategoryCreate, CategoryName};

/// The actor that owns every [`Category`].
pub type CategoryStore = ResourceActor<Category>;

/// Creates a new category store and its controller.
///
/// Categories are keyed by their name exactly as given.
pub fn new(capacity: usize) -> (CategoryStore, CategoryController) {
    let (store, client) = ResourceActor::new(capacity, |params: &CategoryCreate| {
        CategoryName::from(params.name.clone())
    });
    (store, CategoryController::new(client))
}
