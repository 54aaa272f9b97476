//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部への依存（Notion API, 現在時刻, ID 生成）への
//! インターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - Notion が source of truth（正本）: roomies / chores は毎回読み直す
//! - ランナー自身は状態を一切持たない（週次の回転はカレンダーから導出）
//! - テストでは FixedClock と wiremock のモックサーバで差し替える

pub mod clock;
pub mod id_generator;
pub mod store;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::store::HouseholdStore;
