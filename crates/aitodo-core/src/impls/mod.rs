//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **FileSnapshotStore**: ローカルファイル（CLI / 本番用）
//! - **InMemorySnapshotStore**: テスト用の永続化先
//! - **TracingEventSink** / **RecordingEventSink**: イベント通知

pub mod event_sinks;
pub mod file_snapshot;
pub mod inmem_snapshot;

// 主要な型を再エクスポート
pub use self::event_sinks::{RecordingEventSink, TracingEventSink};
pub use self::file_snapshot::FileSnapshotStore;
pub use self::inmem_snapshot::InMemorySnapshotStore;
