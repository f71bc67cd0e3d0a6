//! # Session Entity
//!
//! 1件のセッションレポートの抽出結果を表すドメインエンティティ

use chrono::{DateTime, Utc};
use std::path::Path;

use super::grind_spot::GrindSpot;

/// 失敗セッションのソート用センチネルID
///
/// 失敗セッションはグラインドスポットを持たないため、ソート時には
/// 先頭に集まる。レポーターはグループ表示から除外する。
const UNRESOLVED_SPOT_ID: i32 = -1;

/// セッションの検証結果ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// レジストリ上のスポットと数値の抽出に成功
    Valid,
    /// レポートファイルを読み込めなかった
    UnreadableFile,
    /// 構造化データとしてパースできなかった（`grindspot_id` 欠落・非整数を含む）
    MalformedPayload,
    /// スポットは既知だが `newSession.drops` 内の必須キーが構造的に欠落
    MissingField,
    /// `grindspot_id` がレジストリに存在しない
    UnknownGrindSpot,
}

/// セッション
///
/// 1件のレポートファイルにつき必ず1件生成される。成功・失敗を問わず
/// 入力を黙って捨てることはない。構築後は変更されない。
#[derive(Debug, Clone)]
pub struct Session {
    /// 解決済みのグラインドスポット（`status == Valid` の場合のみ `Some`）
    pub grind_spot: Option<GrindSpot>,
    /// 抽出したトラッシュルート数（`Valid` 以外では意味を持たない）
    pub value: i64,
    /// 処理時刻。レポート自体からは取得せず、ソートのタイブレークにのみ使用
    pub created_at: DateTime<Utc>,
    /// 検証結果
    pub status: SessionStatus,
    /// エラー表示に使う元ファイルのパス（常に設定される）
    pub source_path: String,
}

impl Session {
    /// 検証に成功したセッションを作成
    pub fn valid(grind_spot: GrindSpot, value: i64, source_path: &Path) -> Self {
        Self {
            grind_spot: Some(grind_spot),
            value,
            created_at: Utc::now(),
            status: SessionStatus::Valid,
            source_path: source_path.to_string_lossy().to_string(),
        }
    }

    /// 検証に失敗したセッションを作成
    ///
    /// スポット未解決のまま返る明示的な失敗バリアント。後からステータスを
    /// 書き換えるプレースホルダは使わない。
    pub fn failed(status: SessionStatus, source_path: &Path) -> Self {
        Self {
            grind_spot: None,
            value: -1,
            created_at: Utc::now(),
            status,
            source_path: source_path.to_string_lossy().to_string(),
        }
    }

    /// 検証に成功したセッションかどうか
    pub fn is_valid(&self) -> bool {
        self.status == SessionStatus::Valid
    }

    /// バッチソート用のキー: (スポットID昇順, 処理時刻秒昇順)
    ///
    /// タイムスタンプは秒粒度。同一秒のタイは安定ソートにより発見順を保つ。
    pub fn sort_key(&self) -> (i32, i64) {
        let spot_id = self
            .grind_spot
            .as_ref()
            .map(|spot| spot.id)
            .unwrap_or(UNRESOLVED_SPOT_ID);
        (spot_id, self.created_at.timestamp())
    }
}
