//! Shared helpers
//!
//! - `time`: ISO-8601 parsing to epoch seconds and timezone resolution
//! - `math`: zero-guarded percentage calculation
//! - `currency`: dollar amount display

pub mod currency;
pub mod math;
pub mod time;
