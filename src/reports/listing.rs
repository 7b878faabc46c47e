//! Message template listing report

use super::utils::{export_json, truncate};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::{MessageTemplate, TemplateListResponse};
use std::collections::BTreeMap;

const ID_WIDTH: usize = 20;
const NAME_WIDTH: usize = 31;
const LANGUAGE_WIDTH: usize = 8;
const CATEGORY_WIDTH: usize = 11;
const CURSOR_PREVIEW: usize = 20;

const TABLE_TOP: &str = "╭──────────────────────┬─────────────────────────────────┬──────────┬─────────────┬─────────────╮\n";
const TABLE_HEADER: &str = "│         ID           │              Name               │ Language │   Status    │  Category   │\n";
const TABLE_DIVIDER: &str = "├──────────────────────┼─────────────────────────────────┼──────────┼─────────────┼─────────────┤\n";
const TABLE_BOTTOM: &str = "╰──────────────────────┴─────────────────────────────────┴──────────┴─────────────┴─────────────╯\n";

/// Template counts per status, category and language (keys upper-cased)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateBreakdown {
    pub status: BTreeMap<String, usize>,
    pub category: BTreeMap<String, usize>,
    pub language: BTreeMap<String, usize>,
}

impl TemplateBreakdown {
    pub fn from_templates(templates: &[MessageTemplate]) -> Self {
        let mut breakdown = Self::default();
        for template in templates {
            *breakdown
                .status
                .entry(template.status.to_uppercase())
                .or_insert(0) += 1;
            *breakdown
                .category
                .entry(template.category.to_uppercase())
                .or_insert(0) += 1;
            *breakdown
                .language
                .entry(template.language.to_uppercase())
                .or_insert(0) += 1;
        }
        breakdown
    }
}

/// Format a template listing for console output
pub fn format_template_list(
    response: &TemplateListResponse,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Console => Ok(render_console(response)),
        OutputFormat::Json => export_json(response),
    }
}

fn render_console(response: &TemplateListResponse) -> String {
    let mut output = String::new();

    output.push_str("📋 WhatsApp Message Templates\n");
    output.push_str(&format!("📊 Total Templates: {}\n\n", response.data.len()));

    if response.data.is_empty() {
        output.push_str("❌ No templates found.\n");
        return output;
    }

    output.push_str(TABLE_TOP);
    output.push_str(TABLE_HEADER);
    output.push_str(TABLE_DIVIDER);

    for template in &response.data {
        output.push_str(&format!(
            "│ {:<20} │ {:<31} │ {:<8} │ {:<11} │ {:<11} │\n",
            truncate(&template.id, ID_WIDTH),
            truncate(&template.name, NAME_WIDTH),
            truncate(&template.language, LANGUAGE_WIDTH),
            template.status.to_uppercase(),
            truncate(&template.category, CATEGORY_WIDTH)
        ));
    }

    output.push_str(TABLE_BOTTOM);

    let breakdown = TemplateBreakdown::from_templates(&response.data);

    output.push_str("\n📈 Summary:\n");
    output.push_str("   📊 Status Breakdown:\n");
    for (status, count) in &breakdown.status {
        output.push_str(&format!(
            "      {} {}: {}\n",
            status_emoji(status),
            status,
            count
        ));
    }

    output.push_str("   🏷️  Category Breakdown:\n");
    for (category, count) in &breakdown.category {
        output.push_str(&format!("      • {}: {}\n", category, count));
    }

    output.push_str("   🌐 Language Breakdown:\n");
    for (language, count) in &breakdown.language {
        output.push_str(&format!("      • {}: {}\n", language, count));
    }

    if let Some(after) = response.paging.as_ref().and_then(|p| p.after_cursor()) {
        output.push_str("\n📄 Pagination:\n");
        output.push_str(&format!("   Next Page Available: {}\n", cursor_preview(after)));
        output.push_str(&format!(
            "   Use: -after=\"{}\" to get next page\n",
            after
        ));
    }

    output
}

/// First characters of a cursor, for display only
fn cursor_preview(cursor: &str) -> String {
    if cursor.chars().count() <= CURSOR_PREVIEW {
        return cursor.to_string();
    }
    let head: String = cursor.chars().take(CURSOR_PREVIEW).collect();
    format!("{}...", head)
}

fn status_emoji(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "approved" => "✅",
        "pending" => "⏳",
        "rejected" => "❌",
        "disabled" => "🚫",
        "pending_deletion" => "🗑️",
        _ => "📄",
    }
}
