//! エラー型定義
//!
//! 起動時の致命的エラーのみ（thiserror使用）。個々のプローブ失敗は
//! エラー型ではなく`probe::ProbeOutcome`で表現する。

use thiserror::Error;

/// Keepalive起動時に発生しうる致命的エラー
#[derive(Debug, Error)]
pub enum KeepaliveError {
    /// SUPABASE_URL未設定
    #[error("SUPABASE_URL is required. Set it in .env or your environment.")]
    MissingUrl,

    /// HTTPクライアント構築失敗
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Keepalive用Result型
pub type KeepaliveResult<T> = Result<T, KeepaliveError>;
