//! CLIインターフェース
//!
//! 引数は持たない（-h/--help・-V/--versionのみ）。
//! 設定はすべて環境変数または.envファイルから読み込む。

use clap::Parser;

/// Supabase Keepalive - Periodic traffic generator that keeps a Supabase project active
#[derive(Parser, Debug)]
#[command(name = "supabase-keepalive")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    SUPABASE_URL                 Base URL of the Supabase project (required)
    SUPABASE_ANON_KEY            API key sent as apikey/Bearer headers
    SUPABASE_SERVICE_ROLE_KEY    Fallback API key when the anon key is unset
    SUPABASE_TABLE               Table to probe via REST (optional)
    KEEPALIVE_REQUESTS           Number of iterations (default: 10)
    KEEPALIVE_INTERVAL_SECONDS   Seconds between iterations (default: 30)
    KEEPALIVE_LOG_LEVEL          Log level filter (default: info)

Values may also be placed in a .env file in the working directory;
existing environment variables take precedence.
"#)]
pub struct Cli;
