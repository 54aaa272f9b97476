//! rota: one-shot weekly chore assignment.
//!
//! 外部の定期ジョブランナーが引数なしで週 1 回起動する想定。
//! 1 回のフロー: 設定読み込み → Notion から roomies / chores を取得 →
//! ローテーション計算 → to-do を chore ごとに 1 件作成 → 終了。
//! 失敗したら exit code 1 でスケジューラ側に伝える。

use rota_core::domain::Rotation;
use rota_core::notion::NotionClient;
use rota_core::ports::{SystemClock, UlidGenerator};
use rota_core::{Config, Runner};

#[tokio::main]
async fn main() {
    // .env があれば読む（なければ環境変数のみ）
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store = match NotionClient::new(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "failed to build notion client");
            std::process::exit(1);
        }
    };

    let runner = Runner::new(
        store,
        SystemClock,
        UlidGenerator::new(SystemClock),
        Rotation::new(config.rotation_start),
    );

    match runner.run().await {
        Ok(report) if report.is_noop() => {
            tracing::info!("no chores found; nothing created");
        }
        Ok(report) => {
            tracing::info!(
                created = report.created,
                chores = report.chores,
                roomies = report.roomies,
                "weekly assignment complete"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "weekly assignment failed");
            std::process::exit(1);
        }
    }
}
