//! Export - ダウンロード用の文書をファイルに書き出す

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::TodoError;

/// `todo-export-YYYY-MM-DD.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("todo-export-{}.json", date.format("%Y-%m-%d"))
}

pub fn write_export(dir: &Path, date: NaiveDate, document: &str) -> Result<PathBuf, TodoError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(date));
    fs::write(&path, document)?;
    Ok(path)
}
