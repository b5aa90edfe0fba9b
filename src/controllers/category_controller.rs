//! # Category Controller
//!
//! High-level API for the category store.

use crate::category_actor::CategoryError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Category, CategoryCreate, CategoryName};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the category store.
#[derive(Clone)]
pub struct CategoryController {
    inner: ResourceClient<Category>,
}

impl CategoryController {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryController {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::AlreadyExists(name) => CategoryError::DuplicateKey(name.into()),
            other => other
                .into_entity_error::<CategoryError>()
                .unwrap_or_else(|e| CategoryError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl CategoryController {
    /// Create a category.
    ///
    /// Fails with [`CategoryError::DuplicateKey`] when the name is taken; the store is
    /// left unchanged.
    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<Category, CategoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every category in creation order.
    #[instrument(skip(self))]
    pub async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.list(None).await
    }

    /// Look up a category by its exact name.
    pub async fn get_category(
        &self,
        name: impl Into<CategoryName>,
    ) -> Result<Option<Category>, CategoryError> {
        self.get(name.into()).await
    }
}
