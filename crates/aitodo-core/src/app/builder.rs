//! TodoAppBuilder - ports のワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - 省略された port には既定の実装を使う

use std::sync::Arc;

use crate::config::TodoConfig;
use crate::domain::TodoError;
use crate::impls::FileSnapshotStore;
use crate::ports::{
    Clock, EventSink, IdGenerator, NoopEventSink, SnapshotStore, SystemClock, UlidGenerator,
};
use crate::store::TaskStore;

use super::service::TodoService;
use super::shared::SharedTodoService;

/// TodoAppBuilder は TodoService を構築
///
/// # 使用例
/// ```ignore
/// let service = TodoAppBuilder::new()
///     .snapshot_store(FileSnapshotStore::new("todos.json"))
///     .clock(FixedClock::new(at))
///     .build()?;
/// ```
///
/// # 既定値
/// - clock: SystemClock
/// - id_generator: 同じ clock を使う UlidGenerator
/// - event_sink: NoopEventSink
/// - snapshot_store: 既定なし（未設定なら BuildError）
#[derive(Default)]
pub struct TodoAppBuilder {
    clock: Option<Arc<dyn Clock>>,
    ids: Option<Box<dyn IdGenerator>>,
    snapshot: Option<Box<dyn SnapshotStore>>,
    events: Option<Box<dyn EventSink>>,
}

/// BuildError は構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no snapshot store configured. Call snapshot_store() or from_config() first.")]
    MissingSnapshotStore,

    #[error(transparent)]
    Config(#[from] TodoError),
}

impl TodoAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 設定ファイルの内容から clock と FileSnapshotStore を設定
    pub fn from_config(config: &TodoConfig) -> Result<Self, BuildError> {
        let builder = Self {
            clock: Some(config.clock()?),
            ..Self::default()
        };
        Ok(builder.snapshot_store(FileSnapshotStore::new(config.resolved_snapshot_path())))
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    pub fn snapshot_store(mut self, snapshot: impl SnapshotStore + 'static) -> Self {
        self.snapshot = Some(Box::new(snapshot));
        self
    }

    pub fn event_sink(mut self, events: impl EventSink + 'static) -> Self {
        self.events = Some(Box::new(events));
        self
    }

    /// TodoService を構築（スナップショットはここで 1 回だけ読み込む）
    pub fn build(self) -> Result<TodoService, BuildError> {
        let snapshot = self.snapshot.ok_or(BuildError::MissingSnapshotStore)?;
        let clock: Arc<dyn Clock> = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let ids = self
            .ids
            .unwrap_or_else(|| Box::new(UlidGenerator::new(Arc::clone(&clock))));
        let events = self.events.unwrap_or_else(|| Box::new(NoopEventSink));

        let store = TaskStore::load(snapshot);
        Ok(TodoService::new(store, clock, ids, events))
    }

    /// マルチスレッド / async 用に Mutex で包んだ service を構築
    pub fn build_shared(self) -> Result<SharedTodoService, BuildError> {
        Ok(SharedTodoService::new(self.build()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemorySnapshotStore;
    use crate::ports::{FixedClock, SequentialIdGenerator};
    use chrono::{TimeZone, Utc};

    #[test]
    fn build_without_snapshot_store_fails() {
        let result = TodoAppBuilder::new().build();
        assert!(matches!(result, Err(BuildError::MissingSnapshotStore)));
    }

    #[test]
    fn build_loads_existing_snapshot() {
        let backing = InMemorySnapshotStore::with_document(
            r#"[{"id":"a","text":"Buy eggs","completed":false,"createdAt":"2024-01-01T00:00:00Z","category":"Personal","priority":"normal"}]"#,
        );
        let service = TodoAppBuilder::new()
            .snapshot_store(backing)
            .build()
            .unwrap();
        assert_eq!(service.all().len(), 1);
    }

    #[test]
    fn injected_ports_are_used() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 7, 0, 0).unwrap();
        let mut service = TodoAppBuilder::new()
            .snapshot_store(InMemorySnapshotStore::new())
            .clock(FixedClock::new(at))
            .id_generator(SequentialIdGenerator::new())
            .build()
            .unwrap();

        let id = service.add_task("Water plants", None, None).unwrap().value;
        assert_eq!(id.as_str(), "task-1");
        assert_eq!(service.get(&id).unwrap().created_at, at);
        assert_eq!(service.suggest("").text, "Plan today: prioritize 3 tasks");
    }

    #[test]
    fn default_ids_are_ulids() {
        let mut service = TodoAppBuilder::new()
            .snapshot_store(InMemorySnapshotStore::new())
            .build()
            .unwrap();
        let id = service.add_task("Something", None, None).unwrap().value;
        assert_eq!(id.as_str().len(), 26);
    }
}
