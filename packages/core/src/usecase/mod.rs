//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! 呼び出し元（CLI や API 層など）から呼び出され、Domain 層を操作します。

pub mod error;
pub mod item_service;

pub use error::ItemServiceError;
pub use item_service::ItemService;
