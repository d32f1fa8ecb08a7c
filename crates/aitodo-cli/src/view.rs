//! Presentation: every user-facing string lives here.

use aitodo_core::{Applied, Priority, Suggestion, TaskRecord, TaskStats};
use chrono::Local;

pub fn task_line(task: &TaskRecord) -> String {
    let check = if task.completed { "x" } else { " " };
    format!("[{check}] {}  {}\n    {}", task.id, task.text, meta_line(task))
}

/// `Work • ⚠️ Urgent • 2024-05-01 10:00`
pub fn meta_line(task: &TaskRecord) -> String {
    let urgent = if task.priority == Priority::Urgent {
        "⚠️ Urgent • "
    } else {
        ""
    };
    let created = task
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M");
    format!("{} • {urgent}{created}", task.category)
}

pub fn empty_list() -> &'static str {
    "No tasks. Try `aitodo suggest` for an idea."
}

pub fn suggestion(s: &Suggestion) -> String {
    format!("{}\n    {} • {}", s.text, s.category, s.priority)
}

pub fn stats_line(stats: &TaskStats) -> String {
    format!(
        "{} item(s), {} completed, {} active ({}%)",
        stats.total, stats.completed, stats.active, stats.percent_complete
    )
}

/// Persistence warning for the user, if the snapshot write failed.
pub fn warn_if_unsaved<T>(applied: &Applied<T>) {
    if let Some(reason) = applied.warning() {
        eprintln!("warning: change not saved to disk ({reason})");
    }
}
