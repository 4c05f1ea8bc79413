//! QuestRadar Library
//!
//! Core library for Galxe quest discovery, scoring, and ranking

pub mod classify;
pub mod config;
pub mod galxe;
pub mod notify;
pub mod payout;
pub mod ranker;
pub mod report;
pub mod scoring;
pub mod storage;
pub mod types;
pub mod urls;

pub use types::*;
