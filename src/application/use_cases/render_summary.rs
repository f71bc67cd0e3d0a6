//! # Render Summary Use Case
//!
//! グループ化サマリー描画ユースケース
//!
//! ソート済みセッション列を1パスで走査し、スポットごとのグループ表示、
//! エラーセクション、有効件数、スポットごとのベストセッションを
//! `SummarySink` 経由で出力する。

use crate::domain::entities::session::{Session, SessionStatus};
use crate::domain::repositories::summary_sink::{SummarySink, Tint};

/// 1分あたりのレート換算に使う固定除数（切り捨て除算）
const RATE_DIVISOR: i64 = 60;

/// 有効セッションが1件も無いときのメッセージ
const NO_VALID_DATA_MESSAGE: &str =
    "No valid data found. Ensure .json files exist with the correct structure.";

/// スポットごとのベストセッションの追跡エントリ
///
/// 最初に遭遇した順序を保つため Vec で保持する
struct BestEntry {
    spot_id: i32,
    best_value: i64,
    session_index: usize,
}

/// グループ化サマリー描画ユースケース
///
/// 出力先はシンクとして注入されるため、テストでは出力イベントを
/// 記録する実装で検証できる
pub struct RenderSummaryUseCase<S: SummarySink> {
    sink: S,
}

impl<S: SummarySink> RenderSummaryUseCase<S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `sink` - サマリーの出力先
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// ソート済みセッション列からサマリーを描画する
    ///
    /// `valid_count == 0` の場合はグループ・ベスト表示を行わず、
    /// メッセージのみ出力して終了する。
    ///
    /// # Arguments
    ///
    /// * `sessions` - (スポットID, 処理時刻) でソート済みのセッション列
    /// * `valid_count` - `Valid` なセッションの数
    pub fn execute(&mut self, sessions: &[Session], valid_count: usize) {
        if valid_count == 0 {
            self.sink.emit_line(NO_VALID_DATA_MESSAGE, Tint::Error);
            return;
        }

        let mut error_entries: Vec<(String, SessionStatus)> = Vec::new();
        let mut best_entries: Vec<BestEntry> = Vec::new();

        let mut current_spot_id: Option<i32> = None;
        let mut group_counter = 0;

        for (index, session) in sessions.iter().enumerate() {
            if !session.is_valid() {
                error_entries.push((session.source_path.clone(), session.status));
                continue;
            }
            let Some(spot) = session.grind_spot.as_ref() else {
                continue;
            };

            if current_spot_id != Some(spot.id) {
                if current_spot_id.is_some() {
                    self.sink.emit_line("", Tint::Plain);
                }
                self.sink.emit_line(&format!(">>> {} <<<", spot.name), Tint::Header);
                current_spot_id = Some(spot.id);
                group_counter = 0;
            }

            group_counter += 1;
            self.sink.emit(&format!("#{} ", group_counter), Tint::Accent);
            self.sink.emit_line(
                &format!("{} [{}/min]", session.value, session.value / RATE_DIVISOR),
                Tint::Value,
            );

            // 厳密な > 比較なので、同値タイは先に現れたセッションが勝つ
            match best_entries.iter_mut().find(|entry| entry.spot_id == spot.id) {
                Some(entry) => {
                    if session.value > entry.best_value {
                        entry.best_value = session.value;
                        entry.session_index = index;
                    }
                }
                None => best_entries.push(BestEntry {
                    spot_id: spot.id,
                    best_value: session.value,
                    session_index: index,
                }),
            }
        }

        if !error_entries.is_empty() {
            self.sink.emit_line("", Tint::Plain);
            self.sink.emit_line("ERRORS:", Tint::Error);
            for (source_path, status) in &error_entries {
                self.sink.emit_line(
                    &format!("{}: [{}]", source_path, error_label(*status)),
                    Tint::Error,
                );
            }
        }

        self.sink.emit_line("", Tint::Plain);
        self.sink
            .emit_line(&format!("Total sessions: #{}", valid_count), Tint::Accent);

        // ベスト行はソート済み列の中で最初に遭遇した順
        for entry in &best_entries {
            let Some(spot) = sessions
                .get(entry.session_index)
                .and_then(|session| session.grind_spot.as_ref())
            else {
                continue;
            };

            self.sink.emit("Best hour for ", Tint::Accent);
            self.sink.emit(&spot.name, Tint::Header);
            self.sink.emit(": ", Tint::Accent);
            self.sink.emit(&entry.best_value.to_string(), Tint::Value);
            self.sink.emit(" [", Tint::Accent);
            self.sink
                .emit(&(entry.best_value / RATE_DIVISOR).to_string(), Tint::Value);
            self.sink.emit_line("/min]", Tint::Accent);
        }
    }

    /// シンクを取り出す（テストで記録済みイベントを検証するため）
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// エラーセクションに表示するステータスラベル
fn error_label(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::MissingField => "Missing Key",
        SessionStatus::UnknownGrindSpot => "Unsupported Grind Spot",
        _ => "Unknown, missing drop id?",
    }
}
