//! Supabase Keepalive Runner
//!
//! Supabaseプロジェクトへ定期的に軽量トラフィックを送信し、
//! プロジェクトが休止扱いになるのを防ぐ。

#![warn(missing_docs)]

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数・.envファイル）
pub mod config;

/// エラー型定義
pub mod error;

/// ロギング初期化ユーティリティ
pub mod logging;

/// HTTPプローブ（auth health / REST）
pub mod probe;

/// キープアライブループ
pub mod runner;
