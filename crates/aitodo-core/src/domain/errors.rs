//! Errors - エラー型と分類
//!
//! - Validation / NotFound: 呼び出し側に返す。状態は変更しない
//! - PersistenceWrite: `TaskStore::save` が返す。操作側では `Durability` に変換される
//! - snapshot の読み込み失敗はエラーにせず、空の store として扱う（ログのみ）

use thiserror::Error;

use super::ids::TaskId;

/// ErrorKind は運用上の分類（CLI の終了コードなどに使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Persistence,
    Internal,
}

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("task not found: {0}")]
    NotFound(TaskId),

    #[error("failed to write snapshot: {0}")]
    PersistenceWrite(String),

    #[error("failed to serialize tasks: {0}")]
    Export(#[from] serde_json::Error),

    #[error("export failed: {0}")]
    ExportWrite(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("no unused task id after {attempts} attempts")]
    IdExhausted { attempts: usize },
}

impl TodoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::Validation(_) | TodoError::Config(_) => ErrorKind::Validation,
            TodoError::NotFound(_) => ErrorKind::NotFound,
            TodoError::PersistenceWrite(_) | TodoError::ExportWrite(_) => ErrorKind::Persistence,
            TodoError::Export(_) | TodoError::IdExhausted { .. } => ErrorKind::Internal,
        }
    }
}
