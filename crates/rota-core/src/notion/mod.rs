//! Notion アダプタ - HouseholdStore の本番実装
//!
//! # 実装の分割
//! - **client**: reqwest での API 呼び出し（認証、ページネーション、作成）
//! - **props**: ページ JSON とドメイン型の変換（IO なし、単体テスト可能）

pub mod client;
pub mod props;

pub use self::client::NotionClient;
