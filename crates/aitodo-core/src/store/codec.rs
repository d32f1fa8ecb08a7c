//! SnapshotCodec - タスク列と JSON 文書の相互変換
//!
//! # デコード時の検証
//! 1. serde_json で `Vec<TaskRecord>` にデシリアライズ（未知の category なども失敗）
//! 2. text が空でないこと
//! 3. id が空でなく、重複していないこと
//!
//! どれかに違反した文書は「壊れている」とみなす。

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::TaskRecord;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("task at index {index} has blank text")]
    BlankText { index: usize },

    #[error("task at index {index} has a blank id")]
    BlankId { index: usize },

    #[error("duplicate task id `{0}`")]
    DuplicateId(String),
}

/// Pretty-printed JSON array, newest first.
pub fn encode(tasks: &[TaskRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tasks)
}

pub fn decode(document: &str) -> Result<Vec<TaskRecord>, DecodeError> {
    let tasks: Vec<TaskRecord> = serde_json::from_str(document)?;

    let mut seen = HashSet::with_capacity(tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        if task.text.trim().is_empty() {
            return Err(DecodeError::BlankText { index });
        }
        if task.id.is_blank() {
            return Err(DecodeError::BlankId { index });
        }
        if !seen.insert(&task.id) {
            return Err(DecodeError::DuplicateId(task.id.to_string()));
        }
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TWO_TASKS: &str = r#"[
        {"id":"b","text":"Buy milk","completed":false,"createdAt":"2024-01-02T08:00:00Z","category":"Personal","priority":"normal"},
        {"id":"a","text":"Pay bill now","completed":true,"createdAt":"2024-01-01T08:00:00Z","category":"Urgent","priority":"urgent"}
    ]"#;

    #[test]
    fn decodes_valid_document_in_order() {
        let tasks = decode(TWO_TASKS).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id.as_str(), "b");
        assert_eq!(tasks[1].id.as_str(), "a");
    }

    #[test]
    fn encode_then_decode_keeps_records() {
        let tasks = decode(TWO_TASKS).unwrap();
        let document = encode(&tasks).unwrap();
        assert_eq!(decode(&document).unwrap(), tasks);
    }

    #[rstest]
    #[case::not_json("{not json")]
    #[case::object_instead_of_array(r#"{"id":"a"}"#)]
    #[case::unknown_category(
        r#"[{"id":"a","text":"x","completed":false,"createdAt":"2024-01-01T00:00:00Z","category":"Someday","priority":"normal"}]"#
    )]
    #[case::missing_field(r#"[{"id":"a","text":"x","completed":false}]"#)]
    fn rejects_malformed_documents(#[case] document: &str) {
        assert!(matches!(decode(document), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn rejects_blank_text() {
        let document = r#"[{"id":"a","text":"  ","completed":false,"createdAt":"2024-01-01T00:00:00Z","category":"Other","priority":"normal"}]"#;
        assert!(matches!(
            decode(document),
            Err(DecodeError::BlankText { index: 0 })
        ));
    }

    #[test]
    fn rejects_blank_id() {
        let document = r#"[{"id":" ","text":"x","completed":false,"createdAt":"2024-01-01T00:00:00Z","category":"Other","priority":"normal"}]"#;
        assert!(matches!(
            decode(document),
            Err(DecodeError::BlankId { index: 0 })
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let document = r#"[
            {"id":"a","text":"x","completed":false,"createdAt":"2024-01-01T00:00:00Z","category":"Other","priority":"normal"},
            {"id":"a","text":"y","completed":false,"createdAt":"2024-01-01T00:00:00Z","category":"Other","priority":"normal"}
        ]"#;
        assert!(matches!(decode(document), Err(DecodeError::DuplicateId(id)) if id == "a"));
    }
}
