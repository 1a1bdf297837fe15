//! Repository 実装で共有するアイテムの格納テーブル
//!
//! 挿入順を保持する Vec をそのままストレージとして使います。
//! ID の重複と容量の上限はここで検査します。

use crate::domain::{Item, ItemId, RepositoryError};

/// Default maximum number of items a repository holds
pub const DEFAULT_ITEM_CAPACITY: usize = 1000;

/// Insertion-ordered item storage with a capacity limit
#[derive(Debug, Clone)]
pub(crate) struct ItemTable {
    items: Vec<Item>,
    capacity: usize,
}

impl ItemTable {
    /// Create an empty table
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Create a table from already stored items.
    ///
    /// Loaded items are not counted against the capacity check, only
    /// against id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateId` if two items share an id
    pub(crate) fn from_items(items: Vec<Item>, capacity: usize) -> Result<Self, RepositoryError> {
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|other| other.id == item.id) {
                return Err(RepositoryError::DuplicateId(item.id));
            }
        }
        Ok(Self { items, capacity })
    }

    /// Append a new item
    ///
    /// # Errors
    ///
    /// * `RepositoryError::DuplicateId` - an item with the same id exists
    /// * `RepositoryError::CapacityExceeded` - the table is full
    pub(crate) fn insert(&mut self, item: Item) -> Result<(), RepositoryError> {
        if self.get(item.id).is_some() {
            return Err(RepositoryError::DuplicateId(item.id));
        }
        if self.items.len() >= self.capacity {
            return Err(RepositoryError::CapacityExceeded {
                capacity: self.capacity,
                current: self.items.len(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Replace the stored item that has the same id, keeping its position
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ItemNotFound` if no item has that id
    pub(crate) fn replace(&mut self, item: Item) -> Result<(), RepositoryError> {
        let slot = self
            .items
            .iter_mut()
            .find(|stored| stored.id == item.id)
            .ok_or(RepositoryError::ItemNotFound(item.id))?;
        *slot = item;
        Ok(())
    }

    /// Remove an item by id. Returns whether anything was removed.
    pub(crate) fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub(crate) fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn items(&self) -> &[Item] {
        &self.items
    }
}
