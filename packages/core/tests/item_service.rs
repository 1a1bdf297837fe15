//! ItemService integration tests.
//!
//! Runs the service against the bundled repository implementations.

mod fixtures;

use std::sync::Arc;

use fixtures::{TempJsonFile, in_memory_service, init_logger};
use item_manager_core::{
    ItemId, ItemRepository, ItemService, ItemServiceError, JsonFileItemRepository,
    RepositoryError, domain::ValueObjectError,
};

#[test]
fn test_crud_flow_in_memory() {
    // テスト項目: 追加・取得・更新・削除が一通り動作する
    // given (前提条件):
    let (service, repository) = in_memory_service();

    // when (操作):
    service.add_item("SampleItem").unwrap();
    service.add_item("Another").unwrap();
    service.update_item(ItemId::new(1), "Renamed").unwrap();
    service.delete_item(ItemId::new(2)).unwrap();

    // then (期待する結果):
    let items = service.get_all_items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ItemId::new(1));
    assert_eq!(items[0].name.as_str(), "Renamed");
    assert_eq!(repository.count(), Ok(1));
}

#[test]
fn test_get_all_items_single_item() {
    // テスト項目: 1 件だけ保存されていれば一覧はその 1 件のみ
    // given (前提条件):
    let (service, _repository) = in_memory_service();
    service.add_item("SampleItem").unwrap();

    // when (操作):
    let items = service.get_all_items().unwrap();

    // then (期待する結果):
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ItemId::new(1));
    assert_eq!(items[0].name.as_str(), "SampleItem");
}

#[test]
fn test_invalid_names_never_reach_repository() {
    // テスト項目: 不正な名前は追加・更新ともに拒否され、保存内容は変わらない
    // given (前提条件):
    let (service, repository) = in_memory_service();
    service.add_item("Sample Item").unwrap();

    // when (操作):
    let add_result = service.add_item("");
    let update_result = service.update_item(ItemId::new(1), &"x".repeat(31));

    // then (期待する結果):
    assert_eq!(
        add_result,
        Err(ItemServiceError::InvalidArgument(ValueObjectError::ItemNameEmpty))
    );
    assert!(matches!(
        update_result,
        Err(ItemServiceError::InvalidArgument(ValueObjectError::ItemNameTooLong { .. }))
    ));
    let stored = repository.get_item_by_id(ItemId::new(1)).unwrap().unwrap();
    assert_eq!(stored.name.as_str(), "Sample Item");
    assert_eq!(repository.count(), Ok(1));
}

#[test]
fn test_missing_ids() {
    // テスト項目: 存在しない ID の取得・更新・削除はいずれもエラーにならない
    // given (前提条件):
    let (service, _repository) = in_memory_service();

    // when (操作) / then (期待する結果):
    assert_eq!(service.get_item_by_id(ItemId::new(42)), Ok(None));
    assert_eq!(service.update_item(ItemId::new(42), "DoesNotMatter"), Ok(()));
    assert_eq!(service.delete_item(ItemId::new(42)), Ok(()));
    assert_eq!(service.get_all_items(), Ok(vec![]));
}

#[test]
fn test_repository_rejection_is_passed_through() {
    // テスト項目: Repository の容量超過エラーがそのまま返される
    // given (前提条件):
    init_logger();
    let repository = Arc::new(item_manager_core::InMemoryItemRepository::with_capacity(1));
    let service = ItemService::new(repository);
    service.add_item("First").unwrap();

    // when (操作):
    let result = service.add_item("Second");

    // then (期待する結果):
    assert_eq!(
        result,
        Err(ItemServiceError::Repository(RepositoryError::CapacityExceeded {
            capacity: 1,
            current: 1
        }))
    );
}

#[test]
fn test_json_file_service_resumes_ids() {
    // テスト項目: ファイルを開き直した後も ID が重複せずに採番される
    // given (前提条件):
    init_logger();
    let file = TempJsonFile::new();
    {
        let repository = Arc::new(JsonFileItemRepository::open(file.path()).unwrap());
        let service = ItemService::new(repository);
        service.add_item("First").unwrap();
        service.add_item("Second").unwrap();
    }

    // when (操作):
    let repository = Arc::new(JsonFileItemRepository::open(file.path()).unwrap());
    let service = ItemService::resume(repository).unwrap();
    service.add_item("Third").unwrap();

    // then (期待する結果):
    let ids: Vec<i32> = service
        .get_all_items()
        .unwrap()
        .iter()
        .map(|item| item.id.value())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_json_file_without_resume_collides() {
    // テスト項目: resume を使わずに開き直すと ID が衝突し、Repository のエラーが返される
    // given (前提条件):
    init_logger();
    let file = TempJsonFile::new();
    {
        let repository = Arc::new(JsonFileItemRepository::open(file.path()).unwrap());
        ItemService::new(repository).add_item("First").unwrap();
    }

    // when (操作):
    let repository = Arc::new(JsonFileItemRepository::open(file.path()).unwrap());
    let result = ItemService::new(repository).add_item("Again");

    // then (期待する結果):
    assert_eq!(
        result,
        Err(ItemServiceError::Repository(RepositoryError::DuplicateId(
            ItemId::new(1)
        )))
    );
}
