//! JSON ファイル Repository 実装

mod item;

pub use item::JsonFileItemRepository;
