//! # Extract Sessions Use Case
//!
//! バッチ抽出・検証ユースケース

use anyhow::Result;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::dto::extraction_batch::ExtractionBatch;
use crate::domain::entities::session::{Session, SessionStatus};
use crate::domain::repositories::report_repository::ReportRepository;
use crate::domain::services::extraction::ExtractionService;
use crate::domain::services::registry::GrindSpotRegistry;

/// バッチ抽出・検証ユースケース
///
/// 候補ファイルを1件ずつ抽出サービスに渡し、成功・失敗を問わず
/// 全件をセッションとして収集する。1件の不正なレポートが
/// バッチ全体を中断させることはない。
pub struct ExtractSessionsUseCase<R: ReportRepository> {
    report_repository: Arc<R>,
}

impl<R: ReportRepository> ExtractSessionsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `report_repository` - レポートリポジトリ
    pub fn new(report_repository: Arc<R>) -> Self {
        Self { report_repository }
    }

    /// 候補ファイルを抽出・検証してソート済みバッチを返す
    ///
    /// 入力1件につき必ずセッション1件を生成する
    /// （`sessions.len() == paths.len()`）。読み込み失敗は
    /// `UnreadableFile` のセッションに変換され、エラーにはならない。
    ///
    /// ソート順は (スポットID昇順, 処理時刻秒昇順)。安定ソートのため
    /// 同一秒のタイは発見順を保つ。
    ///
    /// # Arguments
    ///
    /// * `paths` - 候補レポートファイルのパスのリスト
    /// * `registry` - グラインドスポットレジストリ
    pub async fn execute(
        &self,
        paths: &[PathBuf],
        registry: &GrindSpotRegistry,
    ) -> Result<ExtractionBatch> {
        let mut sessions = Vec::with_capacity(paths.len());

        for path in paths {
            let session = match self.report_repository.read_report(path).await {
                Ok(content) => ExtractionService::extract(path, &content, registry),
                Err(e) => {
                    warn!("Failed to read report {}: {}", path.display(), e);
                    Session::failed(SessionStatus::UnreadableFile, path)
                }
            };
            sessions.push(session);
        }

        let valid_count = sessions.iter().filter(|s| s.is_valid()).count();

        sessions.sort_by_key(|session| session.sort_key());

        info!(
            "Extracted {} sessions from {} reports ({} valid)",
            sessions.len(),
            paths.len(),
            valid_count
        );

        Ok(ExtractionBatch {
            sessions,
            valid_count,
        })
    }
}
