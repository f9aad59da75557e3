//! HTTPプローブ
//!
//! Supabaseのauth health / RESTエンドポイントへ軽量GETリクエストを送信する。
//! トランスポート失敗はエラーとして伝播せず、センチネル値で表現する。

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{info, warn};

use crate::config::KeepaliveConfig;
use crate::error::KeepaliveResult;

/// プローブのタイムアウト（秒）
const PROBE_TIMEOUT_SECS: u64 = 15;

/// トランスポート失敗を示すセンチネルコード（HTTPステータスと重複しない）
pub const TRANSPORT_FAILURE_CODE: i32 = -1;

/// 単一プローブの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// HTTPステータスコード（2xx以外も含む）
    Status(u16),
    /// 接続・タイムアウト等のトランスポート失敗
    TransportError,
}

impl ProbeOutcome {
    /// 結果コードを取得（トランスポート失敗は-1）
    pub fn code(self) -> i32 {
        match self {
            Self::Status(code) => i32::from(code),
            Self::TransportError => TRANSPORT_FAILURE_CODE,
        }
    }

    /// 2xxかどうか
    pub fn is_success(self) -> bool {
        matches!(self, Self::Status(code) if (200..300).contains(&code))
    }
}

/// Supabaseプローバー
///
/// 全プローブで共通のHTTPクライアントとヘッダー構築規則を持つ。
#[derive(Clone)]
pub struct Prober {
    /// HTTPクライアント
    client: Client,
    /// ベースURL（末尾スラッシュ除去済み）
    base_url: String,
    /// APIキー
    api_key: Option<String>,
}

impl Prober {
    /// 設定から新しいプローバーを作成
    ///
    /// HTTPクライアントを構築できない場合はエラーを返す。
    pub fn new(config: &KeepaliveConfig) -> KeepaliveResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Authヘルスエンドポイントへのプローブ
    pub async fn auth_health(&self) -> ProbeOutcome {
        let url = format!("{}/auth/v1/health", self.base_url);
        self.get("auth", &url, &[]).await
    }

    /// RESTテーブルへのプローブ
    ///
    /// 1行だけ取得しつつ件数を要求する軽量リクエスト。
    pub async fn rest_table(&self, table: &str) -> ProbeOutcome {
        let url = format!("{}/rest/v1/{}?select=*&limit=1", self.base_url, table);
        self.get("rest", &url, &[("Prefer", "count=exact"), ("Range", "0-0")])
            .await
    }

    /// RESTルートへのプローブ（テーブル未設定時）
    pub async fn rest_root(&self) -> ProbeOutcome {
        let url = format!("{}/rest/v1/", self.base_url);
        self.get("rest", &url, &[]).await
    }

    /// 共通GET処理
    ///
    /// APIキーがあればapikeyヘッダーとBearer認証ヘッダーを付与する。
    async fn get(&self, kind: &str, url: &str, extra_headers: &[(&str, &str)]) -> ProbeOutcome {
        let mut request = self.client.get(url).header("Accept", "application/json");

        if let Some(ref api_key) = self.api_key {
            request = request
                .header("apikey", api_key)
                .header("Authorization", format!("Bearer {}", api_key))
                .header("Content-Type", "application/json");
        }

        for (name, value) in extra_headers {
            request = request.header(*name, *value);
        }

        let start = Instant::now();
        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let latency_ms = start.elapsed().as_millis() as u64;
                info!(kind, method = "GET", url, status, latency_ms, "Probe completed");
                ProbeOutcome::Status(status)
            }
            Err(e) => {
                warn!(kind, method = "GET", url, error = %e, "Probe failed");
                ProbeOutcome::TransportError
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(url: &str) -> KeepaliveConfig {
        KeepaliveConfig {
            supabase_url: url.to_string(),
            api_key: None,
            table: None,
            total_requests: 1,
            interval_secs: 0,
        }
    }

    #[test]
    fn test_outcome_code_for_status() {
        assert_eq!(ProbeOutcome::Status(200).code(), 200);
        assert_eq!(ProbeOutcome::Status(404).code(), 404);
    }

    #[test]
    fn test_outcome_code_sentinel_distinct_from_http_statuses() {
        assert_eq!(ProbeOutcome::TransportError.code(), -1);
        // センチネルは有効なHTTPステータス範囲外
        assert!(ProbeOutcome::TransportError.code() < 100);
    }

    #[test]
    fn test_outcome_is_success() {
        assert!(ProbeOutcome::Status(200).is_success());
        assert!(ProbeOutcome::Status(206).is_success());
        assert!(!ProbeOutcome::Status(404).is_success());
        assert!(!ProbeOutcome::Status(500).is_success());
        assert!(!ProbeOutcome::TransportError.is_success());
    }

    #[test]
    fn test_prober_strips_trailing_slash() {
        let prober = Prober::new(&test_config("https://example.supabase.co/")).unwrap();
        assert_eq!(prober.base_url, "https://example.supabase.co");
    }

    #[test]
    fn test_prober_keeps_bare_base_url() {
        let prober = Prober::new(&test_config("https://example.supabase.co")).unwrap();
        assert_eq!(prober.base_url, "https://example.supabase.co");
    }
}
