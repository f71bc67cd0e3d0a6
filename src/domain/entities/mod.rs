//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **GrindSpot**: グラインドスポット（狩場）のバリューオブジェクト
//! - **Session**: 1件のセッションレポートの抽出結果
//! - **ReportInput**: セッションレポートJSONの入力用構造体

pub mod grind_spot;
pub mod report;
pub mod session;
