//! Clock port - 時刻の抽象化
//!
//! - **SystemClock**: OS の現在時刻、ローカル時刻は OS のタイムゾーン
//! - **OffsetClock**: OS の現在時刻、ローカル時刻は固定オフセット（設定で指定）
//! - **FixedClock**: 固定時刻（テスト用）

use chrono::{DateTime, FixedOffset, Local, Offset, Timelike, Utc};
use std::sync::Arc;

/// Clock は現在時刻を提供
///
/// # テスト容易性
/// - trait により時刻を差し替え可能
/// - テストでは FixedClock を使用
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Hour of day (0-23) in the user's local time.
    fn local_hour(&self) -> u32 {
        self.now().with_timezone(&Local).hour()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn local_hour(&self) -> u32 {
        (**self).local_hour()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System time, with the local hour taken in a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct OffsetClock {
    offset: FixedOffset,
}

impl OffsetClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for OffsetClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_hour(&self) -> u32 {
        self.now().with_timezone(&self.offset).hour()
    }
}

/// FixedClock は常に同じ時刻を返す
///
/// ローカル時刻は `offset`（既定は UTC）で計算するので、
/// 実行環境のタイムゾーンに依存しない。
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            at,
            offset: Utc.fix(),
        }
    }

    pub fn with_offset(at: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { at, offset }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }

    fn local_hour(&self) -> u32 {
        self.at.with_timezone(&self.offset).hour()
    }
}
