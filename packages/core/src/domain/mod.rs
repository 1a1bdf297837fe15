//! Domain layer for item management.
//!
//! This module contains business rules that are independent of
//! storage and other infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::Item;
pub use error::{RepositoryError, ValueObjectError};
pub use factory::ItemIdFactory;
#[cfg(test)]
pub use repository::MockItemRepository;
pub use repository::ItemRepository;
pub use value_object::{ItemId, ItemName, MAX_ITEM_NAME_LENGTH};
