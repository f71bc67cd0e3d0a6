//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::io::{self, Write};
use std::sync::Arc;

use crate::adapter::console::ConsoleSummarySink;
use crate::adapter::repositories::file_report_repository::FileReportRepository;
use crate::application::use_cases::discover_reports::DiscoverReportsUseCase;
use crate::application::use_cases::extract_sessions::ExtractSessionsUseCase;
use crate::application::use_cases::render_summary::RenderSummaryUseCase;
use crate::domain::services::registry::GrindSpotRegistry;

use super::cli::Args;

/// Grind Summary Workflow
pub struct GrindSummaryWorkflow {
    registry: GrindSpotRegistry,
    discover_use_case: Arc<DiscoverReportsUseCase<FileReportRepository>>,
    extract_use_case: Arc<ExtractSessionsUseCase<FileReportRepository>>,
}

impl GrindSummaryWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new() -> Self {
        // Repository implementations
        let report_repo = Arc::new(FileReportRepository::new());

        // Use Cases construction
        let discover_use_case = Arc::new(DiscoverReportsUseCase::new(report_repo.clone()));
        let extract_use_case = Arc::new(ExtractSessionsUseCase::new(report_repo));

        Self {
            // レジストリは起動時に一度だけロードし、以降は読み取り専用
            registry: GrindSpotRegistry::load(),
            discover_use_case,
            extract_use_case,
        }
    }

    /// Execute the summary workflow
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting grind report scan in {}", args.reports_dir);

        // Discover report files using Use Case
        let report_files = self.discover_use_case.execute(&args.reports_dir).await?;

        // Extract and validate every report; failures become error sessions
        let batch = self
            .extract_use_case
            .execute(&report_files, &self.registry)
            .await?;

        // Render the grouped summary to the console
        let sink = ConsoleSummarySink::new(!args.no_color);
        let mut renderer = RenderSummaryUseCase::new(sink);
        renderer.execute(&batch.sessions, batch.valid_count);

        if !args.no_pause {
            wait_for_enter()?;
        }

        Ok(())
    }
}

impl Default for GrindSummaryWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

/// 終了前にENTER入力を待つ
///
/// ダブルクリック起動でウィンドウが即座に閉じないようにするための
/// 人間向けの一時停止。コアの責務外なのでワークフローの外縁に置く。
fn wait_for_enter() -> Result<()> {
    print!("\nPress 'ENTER' to exit..");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}
