//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 時刻・ID 生成・永続化・イベント通知を trait で差し替え可能にし、
//! core をストレージや UI なしでテストできるようにします。

pub mod clock;
pub mod event_sink;
pub mod id_generator;
pub mod snapshot_store;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, OffsetClock, SystemClock};
pub use self::event_sink::{EventSink, NoopEventSink};
pub use self::id_generator::{IdGenerator, SequentialIdGenerator, UlidGenerator};
pub use self::snapshot_store::{SnapshotError, SnapshotStore};
