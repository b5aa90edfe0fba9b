use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A category's name, which is also its key in the category store.
///
/// Comparison is exact and case-sensitive: "Pães" and "pães" are different categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(pub String);

impl CategoryName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for CategoryName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A group of products on the bakery's shelves.
///
/// See [`impl ActorEntity for Category`](crate::category_actor::entity) for how the store
/// builds it from a [`CategoryCreate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: CategoryName,
    pub description: String,
}

/// Payload for creating a new category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CategoryCreate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Categories are never modified once created, so there is no update payload.
#[derive(Debug, Clone)]
pub enum CategoryUpdate {}
