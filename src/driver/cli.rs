//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// グラインドセッションレポートを集計して表示するCLI
///
/// デフォルトはカレントディレクトリを走査し、色付きで出力し、
/// 終了前にENTER入力を待つ（従来の挙動と同じ）。
#[derive(Parser, Debug, Clone)]
#[command(name = "grindsum")]
#[command(about = "Summarize grind session reports by grind spot", long_about = None)]
pub struct Args {
    /// Directory containing the .json session reports
    #[arg(short = 'd', long, default_value = ".")]
    pub reports_dir: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Exit immediately instead of waiting for ENTER
    #[arg(long)]
    pub no_pause: bool,
}
