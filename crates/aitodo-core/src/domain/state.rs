//! State - タスクの状態とフィルタ
//!
//! # 状態遷移
//! - Active --toggle--> Completed --toggle--> Active
//! - Active / Completed --delete--> (store から削除、終端)
//! - edit / reclassify は同じ状態への自己遷移

use std::fmt;
use std::str::FromStr;

use super::errors::TodoError;
use super::task::TaskRecord;

/// TaskState は `completed` フラグから導出される状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Active,
    Completed,
}

/// FilterMode は一覧表示の絞り込み条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub fn matches(&self, task: &TaskRecord) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            other => Err(TodoError::Validation(format!(
                "unknown filter mode `{other}` (expected all, active or completed)"
            ))),
        }
    }
}
