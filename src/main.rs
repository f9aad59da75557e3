//! Supabase Keepalive Entry Point

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use supabase_keepalive::cli::Cli;
use supabase_keepalive::config::{load_dotenv, KeepaliveConfig};
use supabase_keepalive::probe::Prober;
use supabase_keepalive::{logging, runner};

#[tokio::main]
async fn main() -> ExitCode {
    // CLIをパース（-h/--helpと-V/--versionのみ）
    let _cli = Cli::parse();

    logging::init();

    // カレントディレクトリの.envを環境変数へマージ（既存値優先）
    load_dotenv(Path::new(".env"));

    let config = match KeepaliveConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        url = %config.supabase_url,
        table = config.table.as_deref().unwrap_or("(none)"),
        requests = config.total_requests,
        interval_secs = config.interval_secs,
        has_api_key = config.api_key.is_some(),
        "Supabase keepalive starting"
    );

    let prober = match Prober::new(&config) {
        Ok(prober) => prober,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    runner::run(&config, &prober).await;

    ExitCode::SUCCESS
}
