//! WhatsApp Business Account analytics CLI
//!

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod prompt;
pub mod reports;
pub mod types;
pub mod utils;
