//! rota-core
//!
//! 週次の家事ローテーションを 1 回分だけ実行するためのコア。
//! 外部スケジューラから週 1 回起動され、Notion の "roomies" / "chores"
//! データベースを読み、割り当てを計算して "to dos" にタスクを 1 件ずつ作る。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, records, todo, rotation）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, HouseholdStore）
//! - **app**: アプリケーションロジック（Runner, RunReport）
//! - **notion**: Notion API アダプタ（HouseholdStore の本番実装）
//! - **config**: 環境変数からの設定読み込み
//! - **error**: エラー型

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod notion;
pub mod ports;

pub use self::app::{RunReport, Runner};
pub use self::config::Config;
pub use self::error::{Result, RotaError};
