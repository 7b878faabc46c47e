//! Report commands, one per `--mode`
//!
//! Each command issues exactly one Graph API request and returns the
//! formatted report; printing is left to the caller.

pub mod analytics;
pub mod list_templates;
pub mod template_analytics;

use crate::config::{Mode, ReportConfig};
use crate::errors::{AppError, AppResult};
use crate::graph::GraphApiClient;
use crate::reports::OutputFormat;
use crate::utils::time::parse_to_epoch;
use chrono_tz::Tz;
use std::path::Path;
use tracing::info;

/// Validated inputs shared by every report command
pub struct ReportRequest<'a> {
    pub config: &'a ReportConfig,
    pub timezone: Tz,
    pub format: OutputFormat,
}

/// Fetch and format the report selected by `config.mode`
pub async fn run_report(client: &GraphApiClient, request: &ReportRequest<'_>) -> AppResult<String> {
    match request.config.mode {
        Mode::Analytics => analytics::run(client, request).await,
        Mode::Template => template_analytics::run(client, request).await,
        Mode::ListTemplates => list_templates::run(client, request).await,
    }
}

/// Parse the start/end flags into an epoch window, rejecting `start > end`
pub fn parse_window(config: &ReportConfig) -> AppResult<(i64, i64)> {
    let start = parse_to_epoch(&config.start_date)?;
    let end = parse_to_epoch(&config.end_date)?;
    if start > end {
        return Err(AppError::InvalidDateRange { start, end });
    }
    Ok((start, end))
}

/// Write a rendered report to `path`, creating parent directories
pub fn write_output_to_file(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    info!("Report written to: {}", path.display());
    Ok(())
}
