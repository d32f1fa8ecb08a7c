//! Events - ドメインイベント
//!
//! 状態が変わった操作ごとに 1 件発行し、`EventSink` port に渡す。
//! 再描画などの判断は受け取る側（view adapter）に任せる。

use serde::Serialize;

use super::ids::TaskId;

/// DomainEvent は store の変更を表す
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    TaskAdded { id: TaskId },
    TaskToggled { id: TaskId, completed: bool },
    TaskEdited { id: TaskId },
    TaskDeleted { id: TaskId },
    CompletedCleared { removed: usize },
}

impl DomainEvent {
    /// イベント名（ログ用）
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::TaskAdded { .. } => "task_added",
            DomainEvent::TaskToggled { .. } => "task_toggled",
            DomainEvent::TaskEdited { .. } => "task_edited",
            DomainEvent::TaskDeleted { .. } => "task_deleted",
            DomainEvent::CompletedCleared { .. } => "completed_cleared",
        }
    }
}
