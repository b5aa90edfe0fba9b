use crate::model::CategoryName;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// An item for sale.
///
/// `id` is assigned by the product store and never changes. Every other field can be
/// replaced through [`ProductController::update_product`](crate::controllers::ProductController::update_product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: CategoryName,
    pub description: String,
}

/// Payload for creating a new product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category: CategoryName,
    #[serde(default)]
    pub description: String,
}

impl ProductCreate {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        category: impl Into<CategoryName>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            description: description.into(),
        }
    }
}

/// Full replacement of a product's mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub category: CategoryName,
    pub description: String,
}

impl From<Product> for ProductUpdate {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            category: product.category,
            description: product.description,
        }
    }
}

/// Criteria for listing a subset of products.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    /// Products whose category equals this name exactly.
    Category(CategoryName),
}
