//! Integration Tests Module
//!
//! End-to-end tests that drive the Graph API client, the report commands and
//! the binary itself against a local mock server.

pub mod config_file;
pub mod report_commands;
