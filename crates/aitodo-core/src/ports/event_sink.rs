//! EventSink port - イベント通知の抽象化
//!
//! - **NoopEventSink**: 何もしない（既定）
//! - 実装は `impls::event_sinks` を参照（TracingEventSink, RecordingEventSink）

use crate::domain::DomainEvent;

/// EventSink はドメインイベントを受け取る
///
/// view adapter はここで再描画のきっかけを受け取る。
/// emit の中から `TodoService` を呼び戻すことはできない（`&mut` 借用中のため）。
pub trait EventSink: Send {
    fn emit(&self, event: &DomainEvent);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &DomainEvent) {}
}
