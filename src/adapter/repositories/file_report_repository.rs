//! File Report Repository Implementation
//!
//! ReportRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::repositories::report_repository::ReportRepository;

/// ファイルシステムベースのレポートリポジトリ
pub struct FileReportRepository;

impl FileReportRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// レポートファイルを発見する（内部実装）
    ///
    /// ディレクトリ直下の `.json` のみが対象。サブディレクトリは走査しない。
    /// ファイル名順に並べてバッチの発見順を決定的にする。
    fn discover_report_files_internal(reports_dir: &str) -> Result<Vec<PathBuf>> {
        let expanded_path = shellexpand::tilde(reports_dir);
        let reports_dir = PathBuf::from(expanded_path.as_ref());

        if !reports_dir.exists() {
            warn!("Reports directory does not exist: {}", reports_dir.display());
            return Ok(Vec::new());
        }

        let mut report_files = Vec::new();

        for entry in WalkDir::new(&reports_dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json") {
                report_files.push(path.to_path_buf());
            }
        }

        info!(
            "Found {} report files in {}",
            report_files.len(),
            reports_dir.display()
        );

        Ok(report_files)
    }

    /// レポートファイルの内容を読み込む（内部実装）
    fn read_report_internal(path: &PathBuf) -> Result<String> {
        fs::read_to_string(path)
            .context(format!("Failed to read report file: {}", path.display()))
    }
}

#[async_trait]
impl ReportRepository for FileReportRepository {
    async fn discover_report_files(&self, reports_dir: &str) -> Result<Vec<PathBuf>> {
        // 内部実装を使用
        // 非同期なので、tokio::task::spawn_blockingでラップ
        let reports_dir = reports_dir.to_string();
        tokio::task::spawn_blocking(move || Self::discover_report_files_internal(&reports_dir))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn read_report(&self, path: &Path) -> Result<String> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_report_internal(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FileReportRepository {
    fn default() -> Self {
        Self::new()
    }
}
