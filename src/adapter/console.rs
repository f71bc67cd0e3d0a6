//! Console Summary Sink
//!
//! SummarySinkのコンソール実装

use colored::Colorize;

use crate::domain::repositories::summary_sink::{SummarySink, Tint};

/// 色付きコンソールシンク
///
/// セマンティックカラーを固定パレットで標準出力に反映する。
/// `use_color` が無効な場合は装飾なしでそのまま出力する。
pub struct ConsoleSummarySink {
    use_color: bool,
}

impl ConsoleSummarySink {
    /// 新しいコンソールシンクを作成
    ///
    /// # Arguments
    ///
    /// * `use_color` - 色付けを行うかどうか
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl SummarySink for ConsoleSummarySink {
    fn emit(&mut self, text: &str, tint: Tint) {
        if !self.use_color {
            print!("{}", text);
            return;
        }

        let colored_text = match tint {
            Tint::Header => text.yellow(),
            Tint::Accent => text.cyan(),
            Tint::Value => text.green(),
            Tint::Error => text.red(),
            Tint::Plain => text.normal(),
        };
        print!("{}", colored_text);
    }
}
