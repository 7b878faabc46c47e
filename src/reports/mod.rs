//! Report formatting and output generation
//!
//! Provides formatting for Graph API responses via the [`ReportFormatter`] facade.
//! Supports Console (box-drawn tables) and JSON output formats.

pub mod account;
pub mod listing;
pub mod template;
pub mod utils;

use crate::errors::AppResult;
use crate::types::{AnalyticsResponse, TemplateAnalyticsResponse, TemplateListResponse};
use chrono_tz::Tz;

/// Output format options for reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

impl OutputFormat {
    /// Parse a `--output` value; anything unrecognised means console
    pub fn parse(format_str: &str) -> Self {
        match format_str.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Console,
        }
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_account_analytics(
        r: &AnalyticsResponse,
        tz: &Tz,
        f: &OutputFormat,
    ) -> AppResult<String> {
        account::format_account_analytics(r, tz, f)
    }

    pub fn format_template_analytics(
        r: &TemplateAnalyticsResponse,
        tz: &Tz,
        f: &OutputFormat,
    ) -> AppResult<String> {
        template::format_template_analytics(r, tz, f)
    }

    pub fn format_template_list(r: &TemplateListResponse, f: &OutputFormat) -> AppResult<String> {
        listing::format_template_list(r, f)
    }
}
