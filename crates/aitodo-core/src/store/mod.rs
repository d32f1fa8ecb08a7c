//! TaskStore - タスク列（新しい順）とそのスナップショット
//!
//! Design:
//! - タスク列の正本はここだけ。変更は `TodoService` からのみ（`pub(crate)` の mutator）
//! - 読み込み失敗は空の列として吸収し、warn ログを出すだけ
//! - 保存は常に列全体を書き込む

pub mod codec;

use tracing::{debug, warn};

use crate::domain::{TaskId, TaskRecord, TodoError};
use crate::ports::SnapshotStore;

pub struct TaskStore {
    tasks: Vec<TaskRecord>,
    snapshot: Box<dyn SnapshotStore>,
}

impl TaskStore {
    /// スナップショットから読み込んで TaskStore を作成（失敗しない）
    pub fn load(snapshot: Box<dyn SnapshotStore>) -> Self {
        let mut store = Self {
            tasks: Vec::new(),
            snapshot,
        };
        store.reload();
        store
    }

    /// スナップショットを読み直す
    ///
    /// 文書が無い・壊れている場合は空になる。エラーは返さない。
    pub fn reload(&mut self) {
        self.tasks = match self.snapshot.read() {
            Ok(None) => {
                debug!(snapshot = %self.snapshot.describe(), "no snapshot yet, starting empty");
                Vec::new()
            }
            Ok(Some(document)) => match codec::decode(&document) {
                Ok(tasks) => {
                    debug!(snapshot = %self.snapshot.describe(), count = tasks.len(), "snapshot loaded");
                    tasks
                }
                Err(err) => {
                    warn!(snapshot = %self.snapshot.describe(), error = %err, "discarding unreadable snapshot");
                    Vec::new()
                }
            },
            Err(err) => {
                warn!(snapshot = %self.snapshot.describe(), error = %err, "failed to read snapshot");
                Vec::new()
            }
        };
    }

    /// 列全体をスナップショットに書き込む
    ///
    /// # Errors
    /// - 書き込みに失敗した場合 `TodoError::PersistenceWrite`
    pub fn save(&self) -> Result<(), TodoError> {
        let document = self.export_document()?;
        self.snapshot
            .write(&document)
            .map_err(|err| TodoError::PersistenceWrite(err.to_string()))
    }

    /// 永続化と同じ形の JSON 文書
    pub fn export_document(&self) -> Result<String, TodoError> {
        Ok(codec::encode(&self.tasks)?)
    }

    pub fn all(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub(crate) fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn get_mut(&mut self, id: &TaskId) -> Option<&mut TaskRecord> {
        self.tasks.iter_mut().find(|task| &task.id == id)
    }

    pub(crate) fn push_front(&mut self, task: TaskRecord) {
        self.tasks.insert(0, task);
    }

    pub(crate) fn remove(&mut self, id: &TaskId) -> Option<TaskRecord> {
        let index = self.tasks.iter().position(|task| &task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// 条件に合わないものを削除し、削除件数を返す
    pub(crate) fn remove_where(&mut self, mut pred: impl FnMut(&TaskRecord) -> bool) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !pred(task));
        before - self.tasks.len()
    }
}
