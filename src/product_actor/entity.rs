//! [`ActorEntity`] implementation for [`Product`].
//!
//! Field validation happens in `from_create_params` and `on_update`. The category reference
//! is checked against the category store, which the product store receives as its context.

use super::error::ProductError;
use crate::controllers::CategoryController;
use crate::framework::ActorEntity;
use crate::model::{CategoryName, Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use async_trait::async_trait;

fn validate_fields(name: &str, price: f64) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::InvalidName);
    }
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(())
}

async fn ensure_category_exists(
    categories: &CategoryController,
    name: &CategoryName,
) -> Result<(), ProductError> {
    match categories.get_category(name.clone()).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ProductError::InvalidReference(name.clone())),
        Err(e) => Err(ProductError::ActorCommunicationError(e.to_string())),
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Filter = ProductFilter;
    type Context = CategoryController;
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        validate_fields(&params.name, params.price)?;
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            category: params.category,
            description: params.description,
        })
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::Category(name) => &self.category == name,
        }
    }

    async fn on_create(&mut self, categories: &CategoryController) -> Result<(), Self::Error> {
        ensure_category_exists(categories, &self.category).await
    }

    /// Replaces every mutable field. The category is only looked up when it changes.
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        categories: &CategoryController,
    ) -> Result<(), Self::Error> {
        validate_fields(&update.name, update.price)?;
        if update.category != self.category {
            ensure_category_exists(categories, &update.category).await?;
        }

        self.name = update.name;
        self.price = update.price;
        self.category = update.category;
        self.description = update.description;
        Ok(())
    }
}
