//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod file_report_repository;
