//! # Summary Sink Trait
//!
//! サマリー出力先の抽象化
//!
//! コンソール色付けは副作用を伴うプレゼンテーション関心事のため、
//! セマンティックカラー付きの `emit` 能力として切り出す。テストでは
//! 出力イベントを記録する実装に差し替えられる。

/// 出力テキストのセマンティックカラー
///
/// 実際の色はAdapter層のシンク実装が決める。色を付けない実装も適合する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// グループ見出し（スポット名）
    Header,
    /// 区切りや連番などの強調
    Accent,
    /// 抽出値とレート
    Value,
    /// エラーセクション
    Error,
    /// 装飾なし
    Plain,
}

/// サマリーシンク
///
/// レポーターが出力を書き込む先
pub trait SummarySink: Send {
    /// テキストを改行なしで出力する
    fn emit(&mut self, text: &str, tint: Tint);

    /// テキストを1行として出力する
    fn emit_line(&mut self, text: &str, tint: Tint) {
        self.emit(text, tint);
        self.emit("\n", Tint::Plain);
    }
}
