//! # Discover Reports Use Case
//!
//! レポートファイル発見ユースケース

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::repositories::report_repository::ReportRepository;

/// レポートファイル発見ユースケース
///
/// 指定されたディレクトリからセッションレポートファイルを発見する
pub struct DiscoverReportsUseCase<R: ReportRepository> {
    report_repository: Arc<R>,
}

impl<R: ReportRepository> DiscoverReportsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `report_repository` - レポートリポジトリ
    pub fn new(report_repository: Arc<R>) -> Self {
        Self { report_repository }
    }

    /// レポートファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `reports_dir` - レポートディレクトリのパス
    ///
    /// # Returns
    ///
    /// 発見されたレポートファイルのパスのリスト
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    pub async fn execute(&self, reports_dir: &str) -> Result<Vec<PathBuf>> {
        self.report_repository.discover_report_files(reports_dir).await
    }
}
