//! Generic store runtime for catalog resources.
//!
//! Each store is a [`ResourceActor`]: a Tokio task that exclusively owns one collection and
//! serves requests arriving on a channel. Callers hold a cloneable [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a [`Storage`] of entities
//! - [`ResourceClient`] - Type-safe handle for sending requests to an actor
//! - [`ActorClient`] - Shared read operations for domain controllers
//! - [`FrameworkError`] - Errors raised by the runtime
//!
//! # Testing
//!
//! See the [`mock`] module for scripting a dependency instead of running it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod storage;

pub use actor::{IdSource, ResourceActor};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use storage::{MemoryStorage, Storage};
