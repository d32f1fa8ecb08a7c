//! SnapshotStore port - 永続化先（1 つの名前付きスナップショット）
//!
//! SnapshotStore は文書（JSON テキスト）をそのまま読み書きするだけで、
//! 中身の解釈（デコード・検証）は `TaskStore` が行います。
//!
//! # 実装
//! - **FileSnapshotStore**: ローカルファイル（CLI 用）
//! - **InMemorySnapshotStore**: メモリ（テスト用、書き込み失敗の注入が可能）

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot backend unavailable: {0}")]
    Unavailable(String),
}

/// SnapshotStore は 1 つの文書を保持する
///
/// # 設計原則
/// - `read` は文書が無い場合 `Ok(None)` を返す（エラーではない）
/// - `write` は文書全体を置き換える（部分書き込みは見えない）
pub trait SnapshotStore: Send {
    fn read(&self) -> Result<Option<String>, SnapshotError>;

    fn write(&self, document: &str) -> Result<(), SnapshotError>;

    /// Where the snapshot lives, for logs.
    fn describe(&self) -> String;
}
