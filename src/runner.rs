//! キープアライブループ
//!
//! 固定回数のプローブを一定間隔で逐次実行する。プローブ失敗でループは
//! 停止しない。

use std::time::Duration;

use tracing::info;

use crate::config::KeepaliveConfig;
use crate::probe::{ProbeOutcome, Prober};

/// 実行結果サマリー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// 実行したループ回数
    pub iterations: u32,
    /// 送信したプローブ数
    pub probes_sent: u64,
    /// トランスポート失敗したプローブ数（2xx以外のステータスは含まない）
    pub failures: u64,
}

impl RunSummary {
    fn record(&mut self, outcome: ProbeOutcome) {
        self.probes_sent += 1;
        if outcome == ProbeOutcome::TransportError {
            self.failures += 1;
        }
    }
}

/// キープアライブループを実行
///
/// 各イテレーションでauth healthプローブを送信し、続けてテーブル設定時は
/// RESTテーブルプローブ、未設定時はRESTルートプローブを送信する。
/// 最終イテレーション以外では設定された間隔だけ待機する。
pub async fn run(config: &KeepaliveConfig, prober: &Prober) -> RunSummary {
    let mut summary = RunSummary::default();
    let total = config.total_requests;

    for i in 1..=total {
        info!(iteration = i, total, "Keepalive iteration");
        summary.iterations += 1;

        summary.record(prober.auth_health().await);

        let rest = match config.table {
            Some(ref table) => prober.rest_table(table).await,
            None => prober.rest_root().await,
        };
        summary.record(rest);

        if i < total && config.interval_secs > 0 {
            tokio::time::sleep(Duration::from_secs(config.interval_secs)).await;
        }
    }

    info!(
        iterations = summary.iterations,
        probes = summary.probes_sent,
        failures = summary.failures,
        "Keepalive completed"
    );

    summary
}
