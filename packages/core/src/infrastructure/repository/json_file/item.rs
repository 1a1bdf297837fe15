//! JSON ファイル Item Repository 実装
//!
//! アイテム一覧を `[{"id": 1, "name": "..."}]` 形式の JSON ファイルに保存します。
//! 変更のたびにファイル全体を書き直します（一時ファイルに書いてから rename）。
//! 書き込みに失敗した場合、メモリ上の状態も変更前のまま残ります。

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use crate::{
    domain::{Item, ItemId, ItemRepository, RepositoryError},
    infrastructure::repository::table::{DEFAULT_ITEM_CAPACITY, ItemTable},
};

/// JSON ファイル Item Repository 実装
#[derive(Debug)]
pub struct JsonFileItemRepository {
    /// 保存先ファイル
    path: PathBuf,
    /// ファイル内容のキャッシュ（ロック中にファイルも書き換える）
    table: Mutex<ItemTable>,
}

impl JsonFileItemRepository {
    /// ファイルを開く（上限: `DEFAULT_ITEM_CAPACITY`）
    ///
    /// ファイルが存在しない場合は空の状態で始め、最初の変更時に作成する。
    ///
    /// # Errors
    ///
    /// * `RepositoryError::Storage` - ファイルを読めない
    /// * `RepositoryError::Serialization` - JSON として不正、または不正なアイテム名を含む
    /// * `RepositoryError::DuplicateId` - ファイル内で ID が重複している
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        Self::with_capacity(path, DEFAULT_ITEM_CAPACITY)
    }

    /// 上限を指定してファイルを開く
    pub fn with_capacity(
        path: impl Into<PathBuf>,
        capacity: usize,
    ) -> Result<Self, RepositoryError> {
        let path = path.into();
        let items = load_items(&path)?;
        tracing::debug!("Loaded {} items from {}", items.len(), path.display());

        Ok(Self {
            table: Mutex::new(ItemTable::from_items(items, capacity)?),
            path,
        })
    }

    /// 保存先ファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, ItemTable>, RepositoryError> {
        self.table.lock().map_err(|_| RepositoryError::LockPoisoned)
    }

    /// 変更をコピーに適用し、ファイルへの保存に成功したときだけ反映する
    ///
    /// `change` が `false` を返した場合（変更なし）はファイルを書かない。
    fn modify<F>(&self, change: F) -> Result<(), RepositoryError>
    where
        F: FnOnce(&mut ItemTable) -> Result<bool, RepositoryError>,
    {
        let mut table = self.lock()?;
        let mut next = table.clone();
        if !change(&mut next)? {
            return Ok(());
        }
        save_items(&self.path, next.items())?;
        *table = next;
        Ok(())
    }
}

impl ItemRepository for JsonFileItemRepository {
    fn add_item(&self, item: Item) -> Result<(), RepositoryError> {
        self.modify(|table| table.insert(item).map(|()| true))
    }

    fn get_all_items(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.lock()?.items().to_vec())
    }

    fn get_item_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn update_item(&self, item: Item) -> Result<(), RepositoryError> {
        self.modify(|table| table.replace(item).map(|()| true))
    }

    fn delete_item(&self, id: ItemId) -> Result<(), RepositoryError> {
        self.modify(|table| {
            let removed = table.remove(id);
            if !removed {
                tracing::debug!("Item {} not stored, nothing to delete", id);
            }
            Ok(removed)
        })
    }
}

fn load_items(path: &Path) -> Result<Vec<Item>, RepositoryError> {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content)
            .map_err(|e| RepositoryError::Serialization(format!("{}: {}", path.display(), e))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(storage_error(path, e)),
    }
}

fn save_items(path: &Path, items: &[Item]) -> Result<(), RepositoryError> {
    let json = serde_json::to_string_pretty(items)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json).map_err(|e| storage_error(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| storage_error(path, e))?;
    Ok(())
}

fn storage_error(path: &Path, e: io::Error) -> RepositoryError {
    RepositoryError::Storage(format!("{}: {}", path.display(), e))
}
