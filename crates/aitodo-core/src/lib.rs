//! aitodo-core
//!
//! ローカルで完結する "AI" To-Do のコア（分類ヒューリスティック + タスク store + 操作）。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, task, state, errors, events, applied）
//! - **classifier**: キーワード表と時刻テンプレートによる分類（純粋関数）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, SnapshotStore, EventSink）
//! - **impls**: ports の実装（FileSnapshotStore, InMemorySnapshotStore など）
//! - **store**: TaskStore（load / save / all）とスナップショットのコーデック
//! - **app**: TodoService（操作）、TodoAppBuilder、SharedTodoService
//! - **config**: TOML 設定

pub mod app;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod store;

pub use app::{SharedTodoService, TaskStats, TodoAppBuilder, TodoService};
pub use classifier::{Suggestion, classify};
pub use config::TodoConfig;
pub use domain::{
    Applied, Category, DomainEvent, Durability, ErrorKind, FilterMode, Priority, TaskId,
    TaskRecord, TaskState, TodoError,
};
