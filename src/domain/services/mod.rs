//! # Domain Services
//!
//! ドメインサービス（純粋なビジネスルール）
//!
//! ## サービス
//!
//! - **GrindSpotRegistry**: 組み込みのグラインドスポットテーブルと検索
//! - **ExtractionService**: レポート内容の検証とセッションへの変換

pub mod extraction;
pub mod registry;
