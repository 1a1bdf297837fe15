//! Repository trait for item persistence.
//!
//! The usecase layer depends on this trait only; concrete storage lives in
//! `infrastructure::repository`.

use super::{Item, ItemId, RepositoryError};

/// Storage collaborator for items
///
/// Implementations own their synchronization; the service adds none.
#[cfg_attr(test, mockall::automock)]
pub trait ItemRepository: Send + Sync {
    /// Store a new item
    fn add_item(&self, item: Item) -> Result<(), RepositoryError>;

    /// Get every stored item, in repository order
    fn get_all_items(&self) -> Result<Vec<Item>, RepositoryError>;

    /// Look up an item by id. `Ok(None)` when nothing matches.
    fn get_item_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError>;

    /// Persist changes to an existing item
    fn update_item(&self, item: Item) -> Result<(), RepositoryError>;

    /// Remove an item by id
    fn delete_item(&self, id: ItemId) -> Result<(), RepositoryError>;
}
