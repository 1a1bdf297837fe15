//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::ItemId;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ItemName validation error
    #[error("ItemName cannot be empty")]
    ItemNameEmpty,

    /// ItemName too long error
    #[error("ItemName cannot exceed {max} characters (got {actual})")]
    ItemNameTooLong { max: usize, actual: usize },

    /// ItemId generator ran past i32::MAX
    #[error("ItemId space exhausted")]
    ItemIdExhausted,
}

/// Errors reported by an ItemRepository implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// An item with the same id is already stored
    #[error("Item with id {0} already exists")]
    DuplicateId(ItemId),

    /// No item with the given id is stored
    #[error("Item with id {0} not found")]
    ItemNotFound(ItemId),

    /// Repository capacity exceeded error
    #[error("Repository capacity exceeded: maximum {capacity} items allowed (current: {current})")]
    CapacityExceeded { capacity: usize, current: usize },

    /// The lock guarding repository state was poisoned by a panicking writer
    #[error("Repository lock poisoned")]
    LockPoisoned,

    /// Backing storage failed (I/O)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}
