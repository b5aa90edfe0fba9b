//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the "server" half of a store. It owns the
//! collection for one entity type and processes requests sequentially, so the collection
//! never needs a `Mutex` or `RwLock`.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use crate::framework::storage::{MemoryStorage, Storage};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Produces the ID for a new entity from its creation payload.
///
/// Stores keyed by a natural key (a category's name) derive the ID from the payload;
/// stores with surrogate keys ignore the payload and count.
pub type IdSource<T> =
    Box<dyn FnMut(&<T as ActorEntity>::Create) -> <T as ActorEntity>::Id + Send + 'static>;

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ## Operations
///
/// * **Create**:
///     1. Asks the `IdSource` for the new ID.
///     2. Rejects the request with `AlreadyExists` if that ID is taken.
///     3. Calls `T::from_create_params`, then the `on_create` hook.
///     4. Inserts the entity and returns a copy of it.
///
/// * **Get**: returns a clone of the entity, or `None`.
///
/// * **List**: returns clones of every entity in insertion order, keeping only those for
///   which [`ActorEntity::matches`] holds when a filter is given.
///
/// * **Update**:
///     1. Clones the stored entity and runs `on_update` against the clone.
///     2. On success the clone replaces the stored entity; on failure the store is unchanged.
pub struct ResourceActor<T: ActorEntity, S: Storage<T> = MemoryStorage<T>> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: S,
    next_id: IdSource<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new in-memory `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel; senders wait when it is full.
    /// * `next_id` - the ID source for created entities.
    pub fn new<F>(buffer_size: usize, next_id: F) -> (Self, ResourceClient<T>)
    where
        F: FnMut(&T::Create) -> T::Id + Send + 'static,
    {
        Self::with_storage(buffer_size, next_id, MemoryStorage::new())
    }
}

impl<T: ActorEntity, S: Storage<T>> ResourceActor<T, S> {
    /// Same as [`ResourceActor::new`] but backed by the given storage.
    pub fn with_storage<F>(buffer_size: usize, next_id: F, store: S) -> (Self, ResourceClient<T>)
    where
        F: FnMut(&T::Create) -> T::Id + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Category" instead of "padaria::model::category::Category"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id)(&params);
                    if self.store.contains(&id) {
                        warn!(entity_type, %id, "Already exists");
                        let _ = respond_to.send(Err(FrameworkError::AlreadyExists(id.to_string())));
                        continue;
                    }

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, %id, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .into_iter()
                        .filter(|item| filter.as_ref().map_or(true, |f| item.matches(f)))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(mut draft) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = draft.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.replace(&id, draft.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(draft));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        code: String,
        label: String,
        slots: u32,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        code: String,
        label: String,
    }

    #[derive(Debug)]
    struct ShelfUpdate {
        label: String,
        slots: u32,
    }

    #[derive(Debug)]
    struct LabelPrefix(&'static str);

    #[derive(Debug, thiserror::Error)]
    #[error("Shelf label must not be empty")]
    struct EmptyLabel;

    #[async_trait]
    impl ActorEntity for Shelf {
        type Id = String;
        type Create = ShelfCreate;
        type Update = ShelfUpdate;
        type Filter = LabelPrefix;
        type Context = ();
        type Error = EmptyLabel;

        fn from_create_params(code: String, params: ShelfCreate) -> Result<Self, EmptyLabel> {
            if params.label.is_empty() {
                return Err(EmptyLabel);
            }
            Ok(Self {
                code,
                label: params.label,
                slots: 0,
            })
        }

        fn matches(&self, filter: &LabelPrefix) -> bool {
            self.label.starts_with(filter.0)
        }

        async fn on_update(&mut self, update: ShelfUpdate, _ctx: &()) -> Result<(), EmptyLabel> {
            // Applied before validation so a rejected update leaves a dirty draft behind
            self.slots = update.slots;
            if update.label.is_empty() {
                return Err(EmptyLabel);
            }
            self.label = update.label;
            Ok(())
        }
    }

    fn shelf(code: &str, label: &str) -> ShelfCreate {
        ShelfCreate {
            code: code.to_string(),
            label: label.to_string(),
        }
    }

    fn start() -> ResourceClient<Shelf> {
        let (actor, client) = ResourceActor::new(10, |params: &ShelfCreate| params.code.clone());
        tokio::spawn(actor.run(()));
        client
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_create_rejects_taken_id_and_keeps_original() {
        let client = start();

        let first = client.create(shelf("A1", "Pães")).await.unwrap();
        assert_eq!(first.label, "Pães");

        let err = client.create(shelf("A1", "Doces")).await.unwrap_err();
        assert!(matches!(err, FrameworkError::AlreadyExists(ref id) if id == "A1"));

        let stored = client.get("A1".to_string()).await.unwrap().unwrap();
        assert_eq!(stored.label, "Pães");
        assert_eq!(client.list(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_entity_errors_are_boxed_and_store_is_untouched() {
        let client = start();

        let err = client.create(shelf("B1", "")).await.unwrap_err();
        assert!(err.into_entity_error::<EmptyLabel>().is_ok());
        assert!(client.get("B1".to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order_and_applies_filter() {
        let client = start();
        for (code, label) in [("Z9", "Pães"), ("A1", "Doces"), ("M5", "Pães de queijo")] {
            client.create(shelf(code, label)).await.unwrap();
        }

        let codes: Vec<_> = client
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.code)
            .collect();
        assert_eq!(codes, vec!["Z9", "A1", "M5"]);

        let paes: Vec<_> = client
            .list(Some(LabelPrefix("Pães")))
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.code)
            .collect();
        assert_eq!(paes, vec!["Z9", "M5"]);
    }

    #[tokio::test]
    async fn test_failed_update_discards_draft() {
        let client = start();
        client.create(shelf("C3", "Bebidas")).await.unwrap();

        let updated = client
            .update(
                "C3".to_string(),
                ShelfUpdate {
                    label: "Bebidas quentes".to_string(),
                    slots: 4,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.slots, 4);

        let err = client
            .update(
                "C3".to_string(),
                ShelfUpdate {
                    label: String::new(),
                    slots: 99,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));

        let stored = client.get("C3".to_string()).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let client = start();

        let err = client
            .update(
                "nope".to_string(),
                ShelfUpdate {
                    label: "x".to_string(),
                    slots: 1,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_closed_actor_reports_actor_closed() {
        let (actor, client) = ResourceActor::<Shelf>::new(1, |p: &ShelfCreate| p.code.clone());
        drop(actor);

        let err = client.list(None).await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }
}
