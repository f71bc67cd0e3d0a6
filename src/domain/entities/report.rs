//! # Report Input
//!
//! セッションレポートJSONの入力用構造体

use serde::Deserialize;

/// セッションレポートファイルからの入力用構造体
///
/// トップレベルの `grindspot_id` は必須。`newSession` 以下はスポットごとに
/// キーが異なる緩い構造のため、`serde_json::Value` のまま保持して
/// 抽出サービス側で検査する。
#[derive(Debug, Clone, Deserialize)]
pub struct ReportInput {
    pub grindspot_id: i32,
    #[serde(rename = "newSession")]
    pub new_session: Option<serde_json::Value>,
}

impl ReportInput {
    /// `newSession.drops` のマッピングを返す
    ///
    /// セクション自体が無い、または `drops` がオブジェクトでない場合は `None`
    pub fn drops(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.new_session
            .as_ref()
            .and_then(|session| session.get("drops"))
            .and_then(|drops| drops.as_object())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_input_full() {
        let json_str = r#"{
            "grindspot_id": 110,
            "newSession": {
                "drops": { "44490_0": 900 }
            }
        }"#;

        let input: ReportInput = serde_json::from_str(json_str).unwrap();

        assert_eq!(input.grindspot_id, 110);
        let drops = input.drops().unwrap();
        assert_eq!(drops.get("44490_0").and_then(|v| v.as_i64()), Some(900));
    }

    #[test]
    fn test_report_input_without_new_session() {
        let json_str = r#"{ "grindspot_id": 7 }"#;

        let input: ReportInput = serde_json::from_str(json_str).unwrap();

        assert_eq!(input.grindspot_id, 7);
        assert!(input.drops().is_none());
    }

    #[test]
    fn test_report_input_drops_not_an_object() {
        let json_str = r#"{ "grindspot_id": 7, "newSession": { "drops": 3 } }"#;

        let input: ReportInput = serde_json::from_str(json_str).unwrap();

        assert!(input.drops().is_none());
    }

    #[test]
    fn test_report_input_missing_id_is_an_error() {
        let json_str = r#"{ "newSession": { "drops": {} } }"#;

        let result: Result<ReportInput, _> = serde_json::from_str(json_str);

        assert!(result.is_err());
    }

    #[test]
    fn test_report_input_ignores_unknown_fields() {
        let json_str = r#"{
            "grindspot_id": 4,
            "started_at": "2024-12-25T10:00:00Z",
            "newSession": { "drops": { "44454_0": 120 }, "duration": 3600 }
        }"#;

        let input: ReportInput = serde_json::from_str(json_str).unwrap();

        assert_eq!(input.grindspot_id, 4);
        assert!(input.drops().is_some());
    }
}
