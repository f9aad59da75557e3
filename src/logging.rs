//! ロギング初期化ユーティリティ

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// デフォルトのログフィルター
const DEFAULT_LOG_FILTER: &str = "info";

/// tracingサブスクライバーを初期化
///
/// フィルターの優先順位は `KEEPALIVE_LOG_LEVEL` > `RUST_LOG` > `info`。
pub fn init() {
    let filter = std::env::var("KEEPALIVE_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
