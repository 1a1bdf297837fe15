//! Core domain models for item management.

use serde::{Deserialize, Serialize};

use super::value_object::{ItemId, ItemName};

/// Represents a named item stored in a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier
    pub id: ItemId,
    /// Item name (always valid)
    pub name: ItemName,
}

impl Item {
    /// Create a new item
    pub fn new(id: ItemId, name: ItemName) -> Self {
        Self { id, name }
    }

    /// Replace the item's name
    pub fn rename(&mut self, name: ItemName) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ItemName {
        ItemName::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_item_new() {
        // テスト項目: 新しい Item が指定した ID と名前で作成される
        // when (操作):
        let item = Item::new(ItemId::new(1), name("SampleItem"));

        // then (期待する結果):
        assert_eq!(item.id, ItemId::new(1));
        assert_eq!(item.name.as_str(), "SampleItem");
    }

    #[test]
    fn test_item_rename_keeps_id() {
        // テスト項目: 名前を変更しても ID は変わらない
        // given (前提条件):
        let mut item = Item::new(ItemId::new(7), name("Before"));

        // when (操作):
        item.rename(name("After"));

        // then (期待する結果):
        assert_eq!(item.id, ItemId::new(7));
        assert_eq!(item.name.as_str(), "After");
    }

    #[test]
    fn test_item_json_shape() {
        // テスト項目: Item は {"id", "name"} の JSON にシリアライズされる
        // given (前提条件):
        let item = Item::new(ItemId::new(1), name("SampleItem"));

        // when (操作):
        let json = serde_json::to_value(&item).unwrap();

        // then (期待する結果):
        assert_eq!(json, serde_json::json!({"id": 1, "name": "SampleItem"}));
    }

    #[test]
    fn test_item_deserialize_rejects_invalid_name() {
        // テスト項目: 不正な名前を持つ JSON は Item に変換できない
        // when (操作):
        let result: Result<Item, _> = serde_json::from_str(r#"{"id": 1, "name": ""}"#);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
