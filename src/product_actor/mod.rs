//! # Product Store
//!
//! The product store keeps every [`Product`] keyed by a generated [`ProductId`]. It depends
//! on the category store: its context is a
//! [`CategoryController`](crate::controllers::CategoryController), used to reject products
//! whose category does not exist.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and its controller
//!
//! ## Usage
//!
//! ```rust
//! use padaria::{category_actor, product_actor};
//! use padaria::model::{CategoryCreate, ProductCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (category_store, categories) = category_actor::new(32);
//!     let (product_store, products) = product_actor::new(32);
//!
//!     tokio::spawn(category_store.run(()));
//!     // The product store needs the category controller
//!     tokio::spawn(product_store.run(categories.clone()));
//!
//!     categories
//!         .create_category(CategoryCreate::new("Doces", "Doces e sobremesas deliciosas"))
//!         .await?;
//!     let brigadeiro = products
//!         .create_product(ProductCreate::new("Brigadeiro", 2.0, "Doces", "Brigadeiro tradicional"))
//!         .await?;
//!     assert_eq!(brigadeiro.id.to_string(), "product_1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::controllers::ProductController;
use crate::framework::ResourceActor;
use crate::model::{Product, ProductCreate, ProductId};

/// The actor that owns every [`Product`].
pub type ProductStore = ResourceActor<Product>;

/// Creates a new product store and its controller.
///
/// Ids are sequential starting at `product_1`. A rejected create still consumes its id.
pub fn new(capacity: usize) -> (ProductStore, ProductController) {
    let mut next_id = 1u32;
    let (store, client) = ResourceActor::new(capacity, move |_: &ProductCreate| {
        let id = ProductId(next_id);
        next_id += 1;
        id
    });
    (store, ProductController::new(client))
}
