//! Adapter Layer
//!
//! 外部システム（ファイルシステム, コンソール）との統合

pub mod console;
pub mod repositories;
