//! Stats - 件数と進捗率

use serde::{Deserialize, Serialize};

use crate::domain::TaskRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// 0-100, rounded to the nearest integer. 0 when there are no tasks.
    pub percent_complete: u8,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[TaskRecord]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let percent_complete = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };

        Self {
            total,
            completed,
            active: total - completed,
            percent_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Priority, TaskId};
    use chrono::Utc;

    fn tasks(completed: &[bool]) -> Vec<TaskRecord> {
        completed
            .iter()
            .enumerate()
            .map(|(i, &done)| {
                let mut task = TaskRecord::new(
                    TaskId::parse(&format!("t{i}")).unwrap(),
                    format!("task {i}"),
                    Utc::now(),
                    Category::Other,
                    Priority::Normal,
                );
                task.completed = done;
                task
            })
            .collect()
    }

    #[test]
    fn empty_store_is_zero_percent() {
        assert_eq!(TaskStats::from_tasks(&[]), TaskStats::default());
    }

    #[test]
    fn rounds_percent() {
        let stats = TaskStats::from_tasks(&tasks(&[true, false, false]));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.percent_complete, 33);

        let stats = TaskStats::from_tasks(&tasks(&[true, true, false]));
        assert_eq!(stats.percent_complete, 67);
    }

    #[test]
    fn all_done_is_hundred() {
        let stats = TaskStats::from_tasks(&tasks(&[true, true]));
        assert_eq!(stats.percent_complete, 100);
    }
}
