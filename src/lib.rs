//! Brand Match CLI Library
//!
//! 入力の組み立て・添付取り込み・対話ウィザード・一括判定・出力

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod intake;
pub mod logging;
pub mod normalizer;
pub mod report;
pub mod submission;
pub mod wizard;
