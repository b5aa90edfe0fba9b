//! [`ActorEntity`] implementation for [`Category`].

use super::error::CategoryError;
use crate::framework::ActorEntity;
use crate::model::{Category, CategoryCreate, CategoryName, CategoryUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryName;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Filter = ();
    type Context = ();
    type Error = CategoryError;

    fn from_create_params(id: CategoryName, params: CategoryCreate) -> Result<Self, Self::Error> {
        if id.as_str().trim().is_empty() {
            return Err(CategoryError::InvalidName);
        }
        Ok(Self {
            name: id,
            description: params.description,
        })
    }

    async fn on_update(
        &mut self,
        update: CategoryUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match update {}
    }
}
