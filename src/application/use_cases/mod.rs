//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverReportsUseCase**: レポートファイルの発見
//! - **ExtractSessionsUseCase**: バッチ抽出・検証とソート
//! - **RenderSummaryUseCase**: グループ化サマリーの描画

pub mod discover_reports;
pub mod extract_sessions;
pub mod render_summary;
