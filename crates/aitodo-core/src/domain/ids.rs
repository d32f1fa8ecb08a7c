//! Domain identifiers.
//!
//! # TaskId
//! - 新規作成時は ULID（小文字）を文字列として保持
//! - スナップショットから読み込む場合は任意の非空文字列を受け入れる
//!   （ブラウザ版が生成した `lz3k9...` 形式の id もそのまま扱える）
//!
//! 生成は `IdGenerator` port に任せ、ここでは型と変換だけを定義します。

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of a Task record.
///
/// Opaque: callers may only compare, display and serialize it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// 文字列から TaskId を作成（前後の空白は除去）
    ///
    /// 空文字列の場合は `None` を返す。
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Generator output, already known to be non-empty.
    pub(crate) fn from_generated(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<Ulid> for TaskId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid.to_string().to_lowercase())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ulid_ids_are_lowercase() {
        let ulid = Ulid::new();
        let id = TaskId::from(ulid);
        assert_eq!(id.as_str(), ulid.to_string().to_lowercase());
        assert_eq!(id.as_str().len(), 26);
    }

    #[test]
    fn parse_trims_and_rejects_blank() {
        assert_eq!(TaskId::parse("  abc ").unwrap().as_str(), "abc");
        assert!(TaskId::parse("   ").is_none());
        assert!(TaskId::parse("").is_none());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = TaskId::parse("lz3k9abc123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"lz3k9abc123\"");

        let back: TaskId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
