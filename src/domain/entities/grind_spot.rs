//! # GrindSpot Entity
//!
//! グラインドスポット（狩場）のバリューオブジェクト

/// グラインドスポット
///
/// ゲーム内の狩場を表すバリューオブジェクト。レジストリのテーブルから
/// 一度だけ構築され、以降は読み取り専用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrindSpot {
    /// レポートの `grindspot_id` と一致する外部スキーマ上のID
    pub id: i32,
    /// 表示名
    pub name: String,
    /// `newSession.drops` 内でトラッシュルート数を引くためのアイテムIDキー
    pub drop_key: String,
}

impl GrindSpot {
    /// 新しいグラインドスポットを作成
    pub fn new(id: i32, name: &str, drop_key: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            drop_key: drop_key.to_string(),
        }
    }
}
