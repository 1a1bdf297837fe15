//! UseCase: アイテム管理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ItemService の各操作（追加・一覧・取得・更新・削除・名前検証）
//! - Repository の呼び出し回数と引数
//!
//! ### なぜこのテストが必要か
//! - 不正な名前が Repository に渡らないことを保証する
//! - 存在しないアイテムの更新が何もしないことを確認する
//! - Repository のエラーが加工されずに呼び出し元へ届くことを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：有効な名前での追加・更新、存在するアイテムの取得
//! - 異常系：空文字・31 文字以上の名前、Repository のエラー
//! - エッジケース：存在しない ID の取得・更新・削除

use std::sync::Arc;

use crate::domain::{Item, ItemId, ItemIdFactory, ItemName, ItemRepository};

use super::error::ItemServiceError;

/// アイテム管理のユースケース
pub struct ItemService {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ItemRepository>,
    /// 新規アイテムの ID 採番
    id_factory: ItemIdFactory,
}

impl ItemService {
    /// 新しい ItemService を作成（ID は 1 から採番）
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self::with_id_factory(repository, ItemIdFactory::new())
    }

    /// ID 採番方法を指定して ItemService を作成
    pub fn with_id_factory(
        repository: Arc<dyn ItemRepository>,
        id_factory: ItemIdFactory,
    ) -> Self {
        Self {
            repository,
            id_factory,
        }
    }

    /// 既存データを持つ Repository から ItemService を作成
    ///
    /// 保存済みアイテムの最大 ID の次から採番する。
    ///
    /// # Errors
    ///
    /// * `ItemServiceError::Repository` - 一覧の取得に失敗した
    pub fn resume(repository: Arc<dyn ItemRepository>) -> Result<Self, ItemServiceError> {
        let last_id = repository
            .get_all_items()?
            .iter()
            .map(|item| item.id)
            .max();

        let id_factory = match last_id {
            Some(id) => ItemIdFactory::starting_after(id),
            None => ItemIdFactory::new(),
        };
        tracing::debug!("Resuming item service after id {:?}", last_id);

        Ok(Self::with_id_factory(repository, id_factory))
    }

    /// アイテムを追加
    ///
    /// 名前の検証に失敗した場合、Repository は呼び出されない。
    ///
    /// # Arguments
    ///
    /// * `name` - アイテム名（1〜30 文字）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 追加成功
    /// * `Err(ItemServiceError::InvalidArgument)` - 名前が不正
    /// * `Err(ItemServiceError::Repository)` - Repository が追加を拒否した
    pub fn add_item(&self, name: &str) -> Result<(), ItemServiceError> {
        let name = Self::parse_name(name)?;
        let id = self
            .id_factory
            .generate()
            .map_err(|_| ItemServiceError::IdExhausted)?;

        self.repository.add_item(Item::new(id, name))?;
        tracing::info!(item_id = %id, "Item added");

        Ok(())
    }

    /// 全てのアイテムを取得（Repository の順序のまま）
    pub fn get_all_items(&self) -> Result<Vec<Item>, ItemServiceError> {
        Ok(self.repository.get_all_items()?)
    }

    /// ID でアイテムを取得
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Item))` - 見つかった
    /// * `Ok(None)` - 該当なし
    pub fn get_item_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemServiceError> {
        Ok(self.repository.get_item_by_id(id)?)
    }

    /// アイテム名を更新
    ///
    /// 該当するアイテムが無ければ何もしない。名前は変更前に検証するため、
    /// 不正な名前で Repository の更新が呼ばれることはない。
    ///
    /// # Arguments
    ///
    /// * `id` - 更新対象の ID
    /// * `new_name` - 新しいアイテム名
    pub fn update_item(&self, id: ItemId, new_name: &str) -> Result<(), ItemServiceError> {
        let Some(mut item) = self.repository.get_item_by_id(id)? else {
            tracing::debug!("Item {} not found, skipping update", id);
            return Ok(());
        };

        item.rename(Self::parse_name(new_name)?);
        self.repository.update_item(item)?;
        tracing::info!(item_id = %id, "Item updated");

        Ok(())
    }

    /// アイテムを削除（存在確認は行わない）
    pub fn delete_item(&self, id: ItemId) -> Result<(), ItemServiceError> {
        self.repository.delete_item(id)?;
        tracing::info!(item_id = %id, "Item deleted");
        Ok(())
    }

    /// アイテム名が有効か判定
    ///
    /// `None`・空文字・30 文字超は無効。
    pub fn validate_item_name(&self, name: Option<&str>) -> bool {
        name.is_some_and(|name| ItemName::validate(name).is_ok())
    }

    fn parse_name(name: &str) -> Result<ItemName, ItemServiceError> {
        ItemName::new(name.to_string()).map_err(|e| {
            tracing::warn!("Rejected item name: {}", e);
            ItemServiceError::InvalidArgument(e)
        })
    }
}
