//! InMemorySnapshotStore - テスト用のスナップショット置き場
//!
//! # 学習ポイント
//! - Arc<Mutex<_>> で clone 間の状態共有（同じ文書を別の TaskStore から読める）
//! - 書き込み失敗の注入（`fail_writes`）

use crate::ports::{SnapshotError, SnapshotStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// InMemorySnapshotStore は文書をメモリに保持する
///
/// clone したインスタンスは同じ文書を共有する。
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    document: Arc<Mutex<Option<String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の文書を持った状態で作成
    pub fn with_document(document: impl Into<String>) -> Self {
        let store = Self::new();
        *store.lock() = Some(document.into());
        store
    }

    /// 以降の write を失敗させる（true）/ 成功させる（false）
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// 現在の文書（テストでの検証用）
    pub fn document(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn read(&self) -> Result<Option<String>, SnapshotError> {
        Ok(self.lock().clone())
    }

    fn write(&self, document: &str) -> Result<(), SnapshotError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SnapshotError::Unavailable("writes disabled".to_string()));
        }
        *self.lock() = Some(document.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
