//! Task record and its enumerated labels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::TodoError;
use super::ids::TaskId;
use super::state::TaskState;

/// Category label assigned by the classifier (or by the caller).
///
/// スナップショット上は `"Work"` のような先頭大文字の文字列で保存する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Urgent,
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Urgent => "Urgent",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "urgent" => Ok(Category::Urgent),
            "other" => Ok(Category::Other),
            other => Err(TodoError::Validation(format!("unknown category `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Priority::Normal),
            "urgent" => Ok(Priority::Urgent),
            other => Err(TodoError::Validation(format!("unknown priority `{other}`"))),
        }
    }
}

/// One to-do item.
///
/// Design:
/// - `id` と `created_at` は作成後に変更しない
/// - 状態遷移（toggle / edit / reclassify）はメソッド経由で行う
/// - `text` が空にならないことは `TodoService` と snapshot 読み込み時の検証で保証する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub category: Category,
    pub priority: Priority,
}

impl TaskRecord {
    pub fn new(
        id: TaskId,
        text: String,
        created_at: DateTime<Utc>,
        category: Category,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
            category,
            priority,
        }
    }

    pub fn state(&self) -> TaskState {
        if self.completed {
            TaskState::Completed
        } else {
            TaskState::Active
        }
    }

    /// Flip completion and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_classification(&mut self, category: Category, priority: Priority) {
        self.category = category;
        self.priority = priority;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> TaskRecord {
        TaskRecord::new(
            TaskId::parse("t1").unwrap(),
            "Send report".to_string(),
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            Category::Work,
            Priority::Normal,
        )
    }

    #[test]
    fn new_record_starts_active() {
        let task = record();
        assert!(!task.completed);
        assert_eq!(task.state(), TaskState::Active);
    }

    #[test]
    fn toggle_flips_state() {
        let mut task = record();
        assert!(task.toggle());
        assert_eq!(task.state(), TaskState::Completed);
        assert!(!task.toggle());
        assert_eq!(task.state(), TaskState::Active);
    }

    #[test]
    fn serializes_with_snapshot_field_names() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["id"], "t1");
        assert_eq!(value["text"], "Send report");
        assert_eq!(value["completed"], false);
        assert_eq!(value["createdAt"], "2024-01-01T09:00:00Z");
        assert_eq!(value["category"], "Work");
        assert_eq!(value["priority"], "normal");
    }

    #[test]
    fn reads_browser_style_timestamps() {
        let json = r#"{
            "id": "lz3k9abc123",
            "text": "Buy milk",
            "completed": true,
            "createdAt": "2024-03-05T18:22:10.123Z",
            "category": "Personal",
            "priority": "urgent"
        }"#;
        let task: TaskRecord = serde_json::from_str(json).unwrap();
        assert_eq!(task.category, Category::Personal);
        assert_eq!(task.priority, Priority::Urgent);
        assert!(task.completed);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("WORK".parse::<Category>().unwrap(), Category::Work);
        assert_eq!(" urgent ".parse::<Priority>().unwrap(), Priority::Urgent);
        assert!(matches!(
            "someday".parse::<Category>(),
            Err(TodoError::Validation(_))
        ));
    }
}
