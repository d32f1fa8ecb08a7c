//! App - アプリケーション層
//!
//! このモジュールは、ports と store を組み合わせてタスク操作を実装します。
//!
//! # 主要コンポーネント
//! - **TodoAppBuilder**: ports のワイヤリング
//! - **TodoService**: タスク操作（add / toggle / edit / delete / clear / filter / export）
//! - **SharedTodoService**: Mutex で直列化した async 向けの表面
//! - **export** / **stats**: 書き出しと集計

pub mod builder;
pub mod export;
pub mod service;
pub mod shared;
pub mod stats;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, TodoAppBuilder};
pub use self::export::export_file_name;
pub use self::service::TodoService;
pub use self::shared::SharedTodoService;
pub use self::stats::TaskStats;
