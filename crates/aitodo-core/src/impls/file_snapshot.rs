//! FileSnapshotStore - ローカルファイルに 1 つの JSON 文書を保存
//!
//! 書き込みは一時ファイル + rename で行い、読み手が途中状態を見ないようにする。

use crate::ports::{SnapshotError, SnapshotStore};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self) -> Result<Option<String>, SnapshotError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, document: &str) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let result = write_then_rename(&temp_path, &self.path, document);
        if result.is_err() {
            // 失敗時は一時ファイルを残さない
            let _ = fs::remove_file(&temp_path);
        }
        result.map_err(SnapshotError::from)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn write_then_rename(temp_path: &Path, path: &Path, document: &str) -> std::io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(document.as_bytes())?;
    file.sync_all()?;
    fs::rename(temp_path, path)
}
