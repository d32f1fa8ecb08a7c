//! Configuration loading
//!
//! `config.toml` の例:
//!
//! ```toml
//! snapshot_path = "/home/me/.local/share/aitodo/ai_todo_v1.json"
//! export_dir = "/home/me/Downloads"
//! utc_offset_minutes = 540
//! ```
//!
//! どの項目も省略可能。ファイル自体が無ければすべて既定値。

use chrono::FixedOffset;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::TodoError;
use crate::ports::{Clock, OffsetClock, SystemClock};

/// スナップショットの既定ファイル名（ブラウザ版の storage key に合わせる）
pub const SNAPSHOT_FILE_NAME: &str = "ai_todo_v1.json";

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoConfig {
    /// Snapshot location. Defaults to the platform data dir.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,

    /// Where `export` writes. Defaults to the current directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Fixed offset used for time-of-day templates instead of the OS time zone.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

impl TodoConfig {
    pub fn load(path: &Path) -> Result<Self, TodoError> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| TodoError::Config(format!("{}: {err}", path.display())))?;
        Self::parse(&content).map_err(|err| match err {
            TodoError::Config(msg) => TodoError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// ファイルが無ければ既定値、あれば読み込む
    pub fn load_or_default(path: &Path) -> Result<Self, TodoError> {
        match std::fs::metadata(path) {
            Ok(_) => Self::load(path),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(TodoError::Config(format!("{}: {err}", path.display()))),
        }
    }

    pub fn parse(content: &str) -> Result<Self, TodoError> {
        let config: Self =
            toml::from_str(content).map_err(|err| TodoError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Platform config file location (`~/.config/aitodo/config.toml` on Linux).
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn resolved_snapshot_path(&self) -> PathBuf {
        if let Some(path) = &self.snapshot_path {
            return path.clone();
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(SNAPSHOT_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(SNAPSHOT_FILE_NAME))
    }

    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn utc_offset(&self) -> Result<Option<FixedOffset>, TodoError> {
        self.utc_offset_minutes
            .map(|minutes| {
                FixedOffset::east_opt(minutes.saturating_mul(60)).ok_or_else(|| {
                    TodoError::Config(format!("utc_offset_minutes out of range: {minutes}"))
                })
            })
            .transpose()
    }

    pub fn clock(&self) -> Result<Arc<dyn Clock>, TodoError> {
        Ok(match self.utc_offset()? {
            Some(offset) => Arc::new(OffsetClock::new(offset)),
            None => Arc::new(SystemClock),
        })
    }

    fn validate(&self) -> Result<(), TodoError> {
        if let Some(path) = &self.snapshot_path
            && path.as_os_str().is_empty()
        {
            return Err(TodoError::Config("snapshot_path must not be empty".to_string()));
        }
        self.utc_offset()?;
        Ok(())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "aitodo", "aitodo")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(TodoConfig::parse("").unwrap(), TodoConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = TodoConfig::parse(
            r#"
snapshot_path = "/tmp/todos.json"
export_dir = "/tmp/exports"
utc_offset_minutes = -300
"#,
        )
        .unwrap();
        assert_eq!(config.resolved_snapshot_path(), PathBuf::from("/tmp/todos.json"));
        assert_eq!(config.resolved_export_dir(), PathBuf::from("/tmp/exports"));
        assert_eq!(
            config.utc_offset().unwrap(),
            FixedOffset::west_opt(5 * 3600)
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            TodoConfig::parse("snapshot = \"x\""),
            Err(TodoError::Config(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_offset() {
        assert!(matches!(
            TodoConfig::parse("utc_offset_minutes = 100000"),
            Err(TodoError::Config(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = TodoConfig::load_or_default(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, TodoConfig::default());
        assert_eq!(config.resolved_export_dir(), PathBuf::from("."));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "utc_offset_minutes = \"nine\"").unwrap();

        let err = TodoConfig::load_or_default(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn default_snapshot_path_uses_storage_key_name() {
        let path = TodoConfig::default().resolved_snapshot_path();
        assert!(path.ends_with(SNAPSHOT_FILE_NAME));
    }
}
