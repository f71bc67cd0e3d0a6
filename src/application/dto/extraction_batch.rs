//! # Extraction Batch DTO
//!
//! バッチ抽出結果のData Transfer Object

use crate::domain::entities::session::Session;

/// バッチ抽出結果
///
/// ソート済みのセッション列と有効件数。セッション列の所有権は
/// バッチ処理の呼び出し元が持ち、レポーターへは参照で渡す。
#[derive(Debug)]
pub struct ExtractionBatch {
    /// (スポットID昇順, 処理時刻秒昇順) でソート済みの全セッション
    pub sessions: Vec<Session>,
    /// `status == Valid` のセッション数
    pub valid_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::session::SessionStatus;
    use std::path::PathBuf;

    #[test]
    fn test_extraction_batch_holds_all_sessions() {
        let sessions = vec![
            Session::failed(SessionStatus::MalformedPayload, &PathBuf::from("a.json")),
            Session::failed(SessionStatus::UnreadableFile, &PathBuf::from("b.json")),
        ];

        let batch = ExtractionBatch {
            sessions,
            valid_count: 0,
        };

        assert_eq!(batch.sessions.len(), 2);
        assert_eq!(batch.valid_count, 0);
    }
}
