//! Item management core.
//!
//! This library provides a validating item service on top of a repository
//! abstraction, plus in-memory and JSON file repository implementations.

pub mod domain;
pub mod infrastructure;
pub mod usecase;

// Re-export entry points
pub use domain::{Item, ItemId, ItemName, ItemRepository, RepositoryError};
pub use infrastructure::repository::{InMemoryItemRepository, JsonFileItemRepository};
pub use usecase::{ItemService, ItemServiceError};
