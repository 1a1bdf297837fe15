//! InMemory Item Repository 実装
//!
//! ドメイン層が定義する ItemRepository trait の具体的な実装。
//! プロセス内の Vec をインメモリ DB として使用します。

use std::sync::{Mutex, MutexGuard};

use crate::domain::{Item, ItemId, ItemRepository, RepositoryError};

use crate::infrastructure::repository::table::{DEFAULT_ITEM_CAPACITY, ItemTable};

/// インメモリ Item Repository 実装
///
/// 挿入順を保持し、削除は存在しない ID に対しても成功する。
#[derive(Debug)]
pub struct InMemoryItemRepository {
    table: Mutex<ItemTable>,
}

impl InMemoryItemRepository {
    /// 新しい InMemoryItemRepository を作成（上限: `DEFAULT_ITEM_CAPACITY`）
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ITEM_CAPACITY)
    }

    /// 上限を指定して InMemoryItemRepository を作成
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Mutex::new(ItemTable::with_capacity(capacity)),
        }
    }

    /// 既存のアイテムで初期化した InMemoryItemRepository を作成
    ///
    /// # Errors
    ///
    /// * `RepositoryError::DuplicateId` - ID が重複している
    pub fn with_items(items: Vec<Item>) -> Result<Self, RepositoryError> {
        Ok(Self {
            table: Mutex::new(ItemTable::from_items(items, DEFAULT_ITEM_CAPACITY)?),
        })
    }

    /// 保存されているアイテム数
    pub fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.items().len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, ItemTable>, RepositoryError> {
        self.table.lock().map_err(|_| RepositoryError::LockPoisoned)
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn add_item(&self, item: Item) -> Result<(), RepositoryError> {
        self.lock()?.insert(item)
    }

    fn get_all_items(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.lock()?.items().to_vec())
    }

    fn get_item_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn update_item(&self, item: Item) -> Result<(), RepositoryError> {
        self.lock()?.replace(item)
    }

    fn delete_item(&self, id: ItemId) -> Result<(), RepositoryError> {
        if !self.lock()?.remove(id) {
            tracing::debug!("Item {} not stored, nothing to delete", id);
        }
        Ok(())
    }
}
