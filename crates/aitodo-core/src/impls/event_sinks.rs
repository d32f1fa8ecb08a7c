//! EventSink の実装

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::DomainEvent;
use crate::ports::EventSink;

/// TracingEventSink はイベントを `tracing` の info ログとして出力する
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &DomainEvent) {
        tracing::info!(event = event.name(), detail = ?event, "todo event");
    }
}

/// RecordingEventSink は受け取ったイベントを順に保持する（テスト用）
///
/// clone したインスタンスは同じ記録を共有するので、
/// 1 つを service に渡し、もう 1 つで検証できる。
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: &DomainEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
