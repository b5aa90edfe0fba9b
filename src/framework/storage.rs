//! # Entity Storage
//!
//! The collection a [`ResourceActor`](crate::framework::ResourceActor) owns. The actor is the
//! only caller, one request at a time, so implementations need no internal locking.
//!
//! [`MemoryStorage`] is the default backend. A persistent backend plugs in through
//! [`ResourceActor::with_storage`](crate::framework::ResourceActor::with_storage).

use crate::framework::entity::ActorEntity;
use std::collections::HashMap;

/// Backing collection for one entity type.
pub trait Storage<T: ActorEntity>: Send + 'static {
    /// Whether an entity with this ID is stored.
    fn contains(&self, id: &T::Id) -> bool;

    /// Look up an entity by ID.
    fn get(&self, id: &T::Id) -> Option<&T>;

    /// Store a new entity. The caller guarantees the ID is not yet present.
    fn insert(&mut self, id: T::Id, item: T);

    /// Overwrite an existing entity, keeping its position. Returns `false` if the ID is unknown.
    fn replace(&mut self, id: &T::Id, item: T) -> bool;

    /// All entities in insertion order.
    fn values(&self) -> Vec<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory storage that remembers insertion order.
pub struct MemoryStorage<T: ActorEntity> {
    items: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: ActorEntity> MemoryStorage<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: ActorEntity> Default for MemoryStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> Storage<T> for MemoryStorage<T> {
    fn contains(&self, id: &T::Id) -> bool {
        self.items.contains_key(id)
    }

    fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    fn insert(&mut self, id: T::Id, item: T) {
        if self.items.insert(id.clone(), item).is_none() {
            self.order.push(id);
        }
    }

    fn replace(&mut self, id: &T::Id, item: T) -> bool {
        match self.items.get_mut(id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    fn values(&self) -> Vec<&T> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
