//! 設定管理
//!
//! `.env`ファイルの環境変数へのマージと、環境変数からの設定構築。
//! 数値項目が不正な場合はエラーにせずデフォルト値へフォールバックする。

use std::path::Path;

use tracing::warn;

use crate::error::{KeepaliveError, KeepaliveResult};

/// デフォルトのリクエスト回数
pub const DEFAULT_REQUESTS: u32 = 10;

/// デフォルトの送信間隔（秒）
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Keepalive設定
///
/// ロード後は読み取り専用。
#[derive(Debug, Clone)]
pub struct KeepaliveConfig {
    /// SupabaseプロジェクトのベースURL
    pub supabase_url: String,
    /// APIキー（anonキー優先、なければservice roleキー）
    pub api_key: Option<String>,
    /// プローブ対象テーブル名
    pub table: Option<String>,
    /// 送信するループ回数
    pub total_requests: u32,
    /// ループ間の待機秒数
    pub interval_secs: u64,
}

impl KeepaliveConfig {
    /// 環境変数から設定を構築
    ///
    /// `SUPABASE_URL`が未設定または空の場合のみエラーを返す。
    pub fn from_env() -> KeepaliveResult<Self> {
        let supabase_url = env_non_empty("SUPABASE_URL").ok_or(KeepaliveError::MissingUrl)?;

        let api_key = env_non_empty("SUPABASE_ANON_KEY")
            .or_else(|| env_non_empty("SUPABASE_SERVICE_ROLE_KEY"));
        let table = env_non_empty("SUPABASE_TABLE");
        let total_requests = env_parse_or("KEEPALIVE_REQUESTS", DEFAULT_REQUESTS);
        let interval_secs = env_parse_or("KEEPALIVE_INTERVAL_SECONDS", DEFAULT_INTERVAL_SECS);

        Ok(Self {
            supabase_url,
            api_key,
            table,
            total_requests,
            interval_secs,
        })
    }
}

/// 空でない環境変数を取得
fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 環境変数を数値としてパース（未設定・不正値はデフォルト）
pub fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// `KEY=VALUE`形式のファイルを環境変数へマージ
///
/// 空行と`#`で始まる行、`=`を含まない行は無視する。値を囲む引用符は
/// 一段だけ除去する。既に設定済みの環境変数は上書きしない。ファイルが
/// 存在しない場合は何もしない。
pub fn load_dotenv(path: &Path) {
    if !path.exists() {
        return;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read env file");
            return;
        }
    };

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = strip_quotes(value.trim());
        if std::env::var_os(key).is_none() {
            std::env::set_var(key, value);
        }
    }
}

/// 値を囲む一対の引用符を除去
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}
