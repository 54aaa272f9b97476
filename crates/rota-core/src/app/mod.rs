//! App - アプリケーション層
//!
//! ports を組み合わせて 1 回分の実行を行います。
//!
//! # 主要コンポーネント
//! - **Runner**: 週次割り当ての実行（fetch → assign → create × N）
//! - **RunReport**: 実行結果のサマリ

pub mod report;
pub mod runner;

pub use self::report::RunReport;
pub use self::runner::Runner;
