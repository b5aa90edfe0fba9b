//! # Product Controller
//!
//! High-level API for the product store.
//! It wraps a `ResourceClient<Product>` and exposes the catalog operations on products.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CategoryName, Product, ProductCreate, ProductFilter, ProductId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the product store.
#[derive(Clone)]
pub struct ProductController {
    inner: ResourceClient<Product>,
}

impl ProductController {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductController {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<ProductError>()
            .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string()))
    }
}

impl ProductController {
    /// Create a product in an existing category.
    ///
    /// Fails with [`ProductError::InvalidReference`] when the category does not exist.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every product in creation order.
    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list(None).await
    }

    /// Products whose category equals `category` exactly.
    ///
    /// An unknown category yields an empty list, not an error.
    #[instrument(skip(self, category))]
    pub async fn get_products_by_category(
        &self,
        category: impl Into<CategoryName>,
    ) -> Result<Vec<Product>, ProductError> {
        let category = category.into();
        debug!(%category, "Sending request");
        self.list(Some(ProductFilter::Category(category))).await
    }

    pub async fn get_product(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        self.get(id).await
    }

    /// Replace every mutable field of the product with `product.id`.
    ///
    /// Fails with [`ProductError::NotFound`] when no product has that id. A failed update
    /// leaves the stored product untouched.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn update_product(&self, product: Product) -> Result<Product, ProductError> {
        debug!(?product, "Sending request");
        let id = product.id;
        self.inner
            .update(id, product.into())
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => ProductError::NotFound(id),
                other => Self::map_error(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_list, expect_update};

    fn pao_frances(id: u32, price: f64) -> Product {
        Product {
            id: ProductId(id),
            name: "Pão Francês".to_string(),
            price,
            category: "Pães".into(),
            description: "Pão francês tradicional".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_products_by_category_sends_category_filter() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let controller = ProductController::new(client);

        let task = tokio::spawn(async move { controller.get_products_by_category("Pães").await });

        let (filter, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(filter, Some(ProductFilter::Category("Pães".into())));
        responder.send(Ok(vec![pao_frances(1, 0.5)])).unwrap();

        let products = task.await.unwrap().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Pão Francês");
    }

    #[tokio::test]
    async fn test_update_product_sends_full_record() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let controller = ProductController::new(client);

        let task =
            tokio::spawn(async move { controller.update_product(pao_frances(1, 10.5)).await });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, ProductId(1));
        assert_eq!(update.price, 10.5);
        assert_eq!(update.category, CategoryName::from("Pães"));
        assert_eq!(update.description, "Pão francês tradicional");
        responder.send(Ok(pao_frances(1, 10.5))).unwrap();

        assert_eq!(task.await.unwrap().unwrap().price, 10.5);
    }

    #[tokio::test]
    async fn test_update_unknown_product_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let controller = ProductController::new(client);

        let task =
            tokio::spawn(async move { controller.update_product(pao_frances(42, 1.0)).await });

        let (_, _, responder) = expect_update(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound("product_42".to_string())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(ProductError::NotFound(ProductId(42)))
        );
    }
}
