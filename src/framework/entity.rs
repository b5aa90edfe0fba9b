//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every catalog resource (Category, Product)
//! must implement to be managed by the generic [`ResourceActor`](crate::framework::ResourceActor).
//! It specifies associated types for IDs, DTOs, list filters, context and errors, and provides
//! the lifecycle hooks (`on_create`, `on_update`) the actor calls while processing requests.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::matches`]
//!
//! You do **not** need to implement these unless you want to customize behavior.
//! `on_create` accepts everything and `matches` keeps every entity.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other stores (a product checks that its
/// category exists by asking the category store). The `Context` type is injected into every
/// hook when the actor is started, not when it is built.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g. a category name, a product id).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Criteria for narrowing a `List` request. Use `()` when the entity is never filtered.
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per entity rather than one per operation; clients match on its variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// Called synchronously before `on_create`; field validation belongs here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity belongs in the result of a filtered `List` request.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    /// Returning an error aborts the creation and leaves the store untouched.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update. The actor hands the hook a scratch copy and only commits it
    /// when the hook succeeds, so a failed update never leaves partial changes behind.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
