//! IdGenerator port - RunId 生成の抽象化
//!
//! ページ ID は Notion が発行するのでこちらでは採番しません。採番するのは
//! 1 回の起動を表す RunId だけです。テスト容易性のために trait として
//! 抽象化しています。

use ulid::Ulid;

use crate::domain::ids::RunId;
use crate::ports::Clock;

/// IdGenerator は起動ごとの RunId を生成
pub trait IdGenerator: Send + Sync {
    fn run_id(&self) -> RunId;
}

/// UlidGenerator は ULID ベースの RunId 生成器
///
/// Clock を使って現在時刻ベースの ULID を生成します。
/// これにより、テスト時に FixedClock を使うと timestamp 部分が決定的になります。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn run_id(&self) -> RunId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        RunId::from(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}
