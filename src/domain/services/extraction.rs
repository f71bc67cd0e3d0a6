//! # Extraction Service
//!
//! レポート内容の検証とセッションへの変換

use std::path::Path;

use crate::domain::entities::report::ReportInput;
use crate::domain::entities::session::{Session, SessionStatus};
use crate::domain::services::registry::GrindSpotRegistry;

/// 抽出サービス
///
/// 読み込み済みのレポート内容を検証し、必ず1件のセッションに変換する。
/// 失敗はステータス付きセッションとして返し、エラーを送出しない。
pub struct ExtractionService;

impl ExtractionService {
    /// レポート内容を検証してセッションに変換
    ///
    /// 終端となる結果は1レコードにつき必ず1つ:
    ///
    /// - JSONとしてパース不能、または `grindspot_id` 欠落・非整数 → `MalformedPayload`
    /// - `grindspot_id` がレジストリに無い → `UnknownGrindSpot`
    /// - スポットは既知だが `newSession.drops` またはスポットのキーが
    ///   構造的に欠落（値の型違いを含む） → `MissingField`
    /// - キーの値が整数として読めた → `Valid`
    ///
    /// 値の型違いを `MissingField` に畳むのは仕様通り。数値への強制変換は
    /// 一切行わない。
    pub fn extract(path: &Path, content: &str, registry: &GrindSpotRegistry) -> Session {
        let input: ReportInput = match serde_json::from_str(content) {
            Ok(input) => input,
            Err(_) => return Session::failed(SessionStatus::MalformedPayload, path),
        };

        let Some(spot) = registry.find(input.grindspot_id) else {
            return Session::failed(SessionStatus::UnknownGrindSpot, path);
        };

        let Some(drops) = input.drops() else {
            return Session::failed(SessionStatus::MissingField, path);
        };

        match drops.get(&spot.drop_key).and_then(|value| value.as_i64()) {
            Some(value) => Session::valid(spot.clone(), value, path),
            None => Session::failed(SessionStatus::MissingField, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn extract(content: &str) -> Session {
        let registry = GrindSpotRegistry::load();
        ExtractionService::extract(&PathBuf::from("/reports/test.json"), content, &registry)
    }

    #[test]
    fn test_extract_valid_session() {
        let session = extract(r#"{"grindspot_id": 110, "newSession": {"drops": {"44490_0": 900}}}"#);

        assert_eq!(session.status, SessionStatus::Valid);
        assert_eq!(session.value, 900);
        assert_eq!(
            session.grind_spot.as_ref().map(|s| s.name.as_str()),
            Some("Starlight Jade Forest")
        );
    }

    #[test]
    fn test_extract_unknown_grind_spot() {
        // 他のフィールドの内容に関わらずレジストリ不一致が優先される
        let session = extract(r#"{"grindspot_id": 999, "newSession": {"drops": {}}}"#);

        assert_eq!(session.status, SessionStatus::UnknownGrindSpot);
        assert!(session.grind_spot.is_none());
    }

    #[test]
    fn test_extract_missing_new_session() {
        let session = extract(r#"{"grindspot_id": 7}"#);

        assert_eq!(session.status, SessionStatus::MissingField);
    }

    #[test]
    fn test_extract_missing_drop_key() {
        // drops はあるが該当スポットのキーが無い
        let session = extract(r#"{"grindspot_id": 7, "newSession": {"drops": {"44450_0": 5}}}"#);

        assert_eq!(session.status, SessionStatus::MissingField);
    }

    #[test]
    fn test_extract_non_numeric_value_is_missing_field() {
        let session =
            extract(r#"{"grindspot_id": 7, "newSession": {"drops": {"44451_0": "many"}}}"#);

        assert_eq!(session.status, SessionStatus::MissingField);
    }

    #[test]
    fn test_extract_float_value_is_missing_field() {
        let session =
            extract(r#"{"grindspot_id": 7, "newSession": {"drops": {"44451_0": 90.5}}}"#);

        assert_eq!(session.status, SessionStatus::MissingField);
    }

    #[test]
    fn test_extract_malformed_json() {
        let session = extract("{ this is not json");

        assert_eq!(session.status, SessionStatus::MalformedPayload);
    }

    #[test]
    fn test_extract_missing_grindspot_id() {
        let session = extract(r#"{"newSession": {"drops": {"44490_0": 900}}}"#);

        assert_eq!(session.status, SessionStatus::MalformedPayload);
    }

    #[test]
    fn test_extract_non_integer_grindspot_id() {
        let session = extract(r#"{"grindspot_id": "tunkuta"}"#);

        assert_eq!(session.status, SessionStatus::MalformedPayload);
    }

    #[test]
    fn test_extract_zero_value_is_valid() {
        let session = extract(r#"{"grindspot_id": 4, "newSession": {"drops": {"44454_0": 0}}}"#);

        assert_eq!(session.status, SessionStatus::Valid);
        assert_eq!(session.value, 0);
    }

    #[test]
    fn test_extract_always_keeps_source_path() {
        let session = extract("not even close");

        assert_eq!(session.source_path, "/reports/test.json");
    }
}
