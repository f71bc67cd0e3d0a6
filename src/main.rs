//! Grindsum - Grind Session Report Summarizer
//!
//! グラインドセッションレポートを狩場ごとに集計して表示

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

// Clean Architecture layers
mod adapter;
mod application;
mod domain;
mod driver;

use driver::{Args, GrindSummaryWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Create workflow with injected dependencies
    let workflow = GrindSummaryWorkflow::new();

    workflow.execute(args).await
}
