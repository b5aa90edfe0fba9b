//! # Generic Messages
//!
//! The message types exchanged between a [`ResourceClient`](crate::framework::ResourceClient)
//! and its [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a store actor.
///
/// The variants cover the catalog's lifecycle operations:
///
/// - **Create**: builds a new resource from [`ActorEntity::Create`] and returns it.
/// - **Get**: fetches one resource by ID.
/// - **List**: returns every resource in insertion order, optionally narrowed by
///   [`ActorEntity::Filter`].
/// - **Update**: applies [`ActorEntity::Update`] to an existing resource and returns the result.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
}
