//! # Entity Store
//!
//! The in-memory collection owned by a [`ResourceActor`](crate::ResourceActor).
//! Entries are kept in id order, and ids are handed out in increasing order, so
//! iteration order is also creation order.
//!
//! Collection-level hooks ([`ActorEntity::after_delete`],
//! [`ActorEntity::handle_collection_action`]) receive the store mutably. Every entry
//! reached through [`EntityStore::get_mut`] is recorded, and the actor publishes an
//! `Updated` event for each of them once the hook succeeds.

use crate::entity::ActorEntity;
use std::collections::{BTreeMap, BTreeSet};

pub struct EntityStore<T: ActorEntity> {
    entries: BTreeMap<T::Id, T>,
    touched: BTreeSet<T::Id>,
}

impl<T: ActorEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            touched: BTreeSet::new(),
        }
    }
}

impl<T: ActorEntity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.entries.get(id)
    }

    /// Mutable access to one entry. The entry is marked as touched.
    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        let item = self.entries.get_mut(id)?;
        self.touched.insert(id.clone());
        Some(item)
    }

    /// Entries in id (creation) order.
    pub fn iter(&self) -> impl Iterator<Item = (&T::Id, &T)> {
        self.entries.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Clones every entry, in id order.
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }

    pub(crate) fn insert(&mut self, id: T::Id, item: T) {
        self.entries.insert(id, item);
    }

    pub(crate) fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.touched.remove(id);
        self.entries.remove(id)
    }

    /// Drains the ids touched since the last call, in id order.
    pub fn take_touched(&mut self) -> Vec<T::Id> {
        std::mem::take(&mut self.touched).into_iter().collect()
    }
}

impl<T: ActorEntity> FromIterator<(T::Id, T)> for EntityStore<T> {
    fn from_iter<I: IntoIterator<Item = (T::Id, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            touched: BTreeSet::new(),
        }
    }
}
