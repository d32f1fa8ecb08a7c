//! IdGenerator port - ID 生成の抽象化
//!
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース（本番用）
//! - **SequentialIdGenerator**: 連番（テスト・デモ用、完全に決定的）

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::TaskId;
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator は一意な TaskId を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数スレッドから使える）
pub trait IdGenerator: Send + Sync {
    fn generate_task_id(&self) -> TaskId;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Clock を使って現在時刻ベースの ULID を生成します。
/// timestamp 部分は FixedClock で固定できますが、ランダム部分は毎回異なります。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_task_id(&self) -> TaskId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        TaskId::from(ulid)
    }
}

/// SequentialIdGenerator は `task-1`, `task-2`, ... を順に返す
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_task_id(&self) -> TaskId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        TaskId::from_generated(format!("task-{n}"))
    }
}
