//! # Report Repository Trait
//!
//! レポートファイルの発見と読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// レポートリポジトリ
///
/// セッションレポートファイルの発見と読み込みを担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// レポートファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `reports_dir` - レポートディレクトリのパス
    ///
    /// # Returns
    ///
    /// ディレクトリ直下で見つかった `.json` ファイルのパスのリスト
    async fn discover_report_files(&self, reports_dir: &str) -> Result<Vec<PathBuf>>;

    /// レポートファイルの内容を読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - レポートファイルのパス
    ///
    /// # Returns
    ///
    /// ファイル内容の文字列
    async fn read_report(&self, path: &Path) -> Result<String>;
}
