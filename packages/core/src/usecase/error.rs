//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// ItemService の操作で発生するエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemServiceError {
    /// 入力されたアイテム名がバリデーションに失敗した
    #[error("Invalid argument: {0}")]
    InvalidArgument(ValueObjectError),

    /// これ以上 ItemId を採番できない
    #[error("No more item ids available")]
    IdExhausted,

    /// Repository が返したエラー（そのまま呼び出し元へ返す）
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
