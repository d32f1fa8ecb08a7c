//! SharedTodoService - 複数タスク / スレッドから使うための包み
//!
//! store 全体を 1 つの `tokio::sync::Mutex` で守り、すべての操作を直列化する。
//! 各メソッドはロックを取ってから `TodoService` の操作を 1 つだけ実行する。

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::classifier::Suggestion;
use crate::domain::{Applied, Category, FilterMode, Priority, TaskId, TaskRecord, TodoError};

use super::service::TodoService;
use super::stats::TaskStats;

#[derive(Clone)]
pub struct SharedTodoService {
    inner: Arc<Mutex<TodoService>>,
}

impl SharedTodoService {
    pub fn new(service: TodoService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    /// 複数の操作をまとめて行う場合はロックを直接取る
    pub async fn lock(&self) -> MutexGuard<'_, TodoService> {
        self.inner.lock().await
    }

    pub async fn suggest(&self, seed: &str) -> Suggestion {
        self.inner.lock().await.suggest(seed)
    }

    pub async fn add_task(
        &self,
        raw_text: &str,
        category: Option<Category>,
        priority: Option<Priority>,
    ) -> Result<Applied<TaskId>, TodoError> {
        self.inner.lock().await.add_task(raw_text, category, priority)
    }

    pub async fn add_classified(
        &self,
        raw_text: &str,
        priority: Option<Priority>,
    ) -> Result<Applied<TaskId>, TodoError> {
        self.inner.lock().await.add_classified(raw_text, priority)
    }

    pub async fn toggle_complete(&self, id: &TaskId) -> Result<Applied<bool>, TodoError> {
        self.inner.lock().await.toggle_complete(id)
    }

    pub async fn edit_text(&self, id: &TaskId, new_text: &str) -> Result<Applied<bool>, TodoError> {
        self.inner.lock().await.edit_text(id, new_text)
    }

    pub async fn reclassify(
        &self,
        id: &TaskId,
    ) -> Result<Applied<(Category, Priority)>, TodoError> {
        self.inner.lock().await.reclassify(id)
    }

    pub async fn delete_task(&self, id: &TaskId) -> Result<Applied<TaskRecord>, TodoError> {
        self.inner.lock().await.delete_task(id)
    }

    pub async fn clear_completed(&self) -> Applied<usize> {
        self.inner.lock().await.clear_completed()
    }

    /// ロック中に絞り込み、結果を clone して返す
    pub async fn filtered(&self, mode: FilterMode) -> Vec<TaskRecord> {
        self.inner.lock().await.filter_by(mode).cloned().collect()
    }

    /// 文字列の mode で絞り込む（未知の mode は `TodoError::Validation`）
    pub async fn filter(&self, mode: &str) -> Result<Vec<TaskRecord>, TodoError> {
        Ok(self.inner.lock().await.filter(mode)?.cloned().collect())
    }

    pub async fn get(&self, id: &TaskId) -> Option<TaskRecord> {
        self.inner.lock().await.get(id).cloned()
    }

    pub async fn stats(&self) -> TaskStats {
        self.inner.lock().await.stats()
    }

    pub async fn export_snapshot(&self) -> Result<String, TodoError> {
        self.inner.lock().await.export_snapshot()
    }
}
