//! Core session state for the NHL stats CLI
//!
//! - `cache`: the process-lifetime team cache

pub mod cache;

pub use cache::TeamCache;
