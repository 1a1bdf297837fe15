//! Shared helpers for integration tests.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use item_manager_core::{InMemoryItemRepository, ItemService};
use item_manager_shared::setup_logger;

/// Initialize logging once per test binary (later calls are ignored)
pub fn init_logger() {
    setup_logger("item-manager-core", "debug");
}

/// Service backed by a fresh in-memory repository
pub fn in_memory_service() -> (ItemService, Arc<InMemoryItemRepository>) {
    init_logger();
    let repository = Arc::new(InMemoryItemRepository::new());
    (ItemService::new(repository.clone()), repository)
}

/// Temporary JSON file removed on drop
pub struct TempJsonFile {
    path: PathBuf,
}

impl TempJsonFile {
    pub fn new() -> Self {
        let path = std::env::temp_dir()
            .join(format!("item-manager-it-{}.json", uuid::Uuid::new_v4()));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempJsonFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
