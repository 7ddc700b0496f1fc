//! Canonical Item Store
//!
//! The ordered, server-reconciled list of items. The vector is private:
//! the only writes are the operations below, and the app hands out the
//! store read-only.

use tracing::warn;

use crate::models::{Item, ItemId};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemCollection {
    items: Vec<Item>,
}

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Replace the whole sequence. Repeated ids keep their first occurrence.
    pub fn initialize(&mut self, items: Vec<Item>) {
        let mut unique: Vec<Item> = Vec::with_capacity(items.len());
        for item in items {
            if unique.iter().any(|kept| kept.id == item.id) {
                warn!("[STORE] Dropping duplicate item id {}", item.id);
                continue;
            }
            unique.push(item);
        }
        self.items = unique;
    }

    /// Append a confirmed item. An id already present is replaced in place.
    pub fn add(&mut self, item: Item) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.id == item.id) {
            warn!("[STORE] Item {} already present, replacing", item.id);
            *slot = item;
            return;
        }
        self.items.push(item);
    }

    /// Swap the entry with `id` for `item`. Returns false when `id` is absent.
    pub fn replace_by_id(&mut self, id: &ItemId, item: Item) -> bool {
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Returns false when `id` is absent.
    pub fn remove_by_id(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Move the element at `from` so it ends up at `to`, shifting the others.
    /// Out-of-range or equal indices leave the sequence untouched.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }
}
