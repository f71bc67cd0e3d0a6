//! # Data Transfer Objects
//!
//! ユースケース間で受け渡すデータ構造

pub mod extraction_batch;
