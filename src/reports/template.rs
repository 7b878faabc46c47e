//! Template analytics report
//!
//! Only the first data group of a response is rendered. Under normal querying
//! the API returns exactly one group; any further groups are ignored.

use super::utils::{export_json, format_number, truncate};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::{TemplateAnalyticsResponse, TemplateDataPoint};
use crate::utils::currency::{format_usd, format_usd_rate};
use crate::utils::math::safe_percentage;
use crate::utils::time::epoch_to_local;
use chrono_tz::Tz;
use std::collections::BTreeMap;

const TEMPLATE_ID_WIDTH: usize = 15;

const TABLE_TOP: &str = "╭──────────────┬─────────────────┬──────────┬───────────┬──────────┬──────────┬───────────┬──────────────╮\n";
const TABLE_HEADER: &str = "│     Date     │  Template ID    │   Sent   │ Delivered │   Read   │ Clicked  │   Cost    │ Click Rate % │\n";
const TABLE_DIVIDER: &str = "├──────────────┼─────────────────┼──────────┼───────────┼──────────┼──────────┼───────────┼──────────────┤\n";
const TABLE_BOTTOM: &str = "╰──────────────┴─────────────────┴──────────┴───────────┴──────────┴──────────┴───────────┴──────────────╯\n";

/// Running totals across every data point of a group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateTotals {
    pub sent: u64,
    pub delivered: u64,
    pub read: u64,
    pub clicked: u64,
    pub cost: f64,
}

impl TemplateTotals {
    pub fn from_data_points(data_points: &[TemplateDataPoint]) -> Self {
        data_points.iter().fold(Self::default(), |mut totals, dp| {
            totals.sent += dp.sent;
            totals.delivered += dp.delivered;
            totals.read += dp.read;
            totals.clicked += dp.total_clicks();
            totals.cost += dp.amount_spent();
            totals
        })
    }

    pub fn click_rate(&self) -> f64 {
        safe_percentage(self.clicked, self.delivered)
    }

    pub fn read_rate(&self) -> f64 {
        safe_percentage(self.read, self.delivered)
    }

    /// Spend per delivered message, only meaningful when both are positive
    pub fn cost_per_delivered(&self) -> Option<f64> {
        (self.cost > 0.0 && self.delivered > 0).then(|| self.cost / self.delivered as f64)
    }
}

/// Click counts summed per `(type, button_content)` pair
pub fn click_breakdown(data_points: &[TemplateDataPoint]) -> BTreeMap<(String, String), u64> {
    let mut summary = BTreeMap::new();
    for clicked in data_points.iter().flat_map(|dp| &dp.clicked) {
        *summary
            .entry((clicked.action_type.clone(), clicked.button_content.clone()))
            .or_insert(0) += clicked.count;
    }
    summary
}

/// Format template analytics for console output
pub fn format_template_analytics(
    response: &TemplateAnalyticsResponse,
    tz: &Tz,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Console => Ok(render_console(response, tz)),
        OutputFormat::Json => export_json(response),
    }
}

fn render_console(response: &TemplateAnalyticsResponse, tz: &Tz) -> String {
    let mut output = String::new();

    let Some(data) = response.data.first() else {
        output.push_str("❌ No template analytics data found.\n");
        return output;
    };

    output.push_str("📊 Template Analytics Report\n");
    output.push_str(&format!(
        "📈 Granularity: {}\n",
        data.granularity.to_uppercase()
    ));
    output.push_str(&format!(
        "🔧 Product Type: {}\n",
        data.product_type.to_uppercase()
    ));
    output.push_str(&format!("📋 Data Points: {}\n", data.data_points.len()));
    output.push_str(&format!("🌎 Timezone: {}\n\n", tz.name()));

    if data.data_points.is_empty() {
        output.push_str("❌ No data points found.\n");
        return output;
    }

    output.push_str(TABLE_TOP);
    output.push_str(TABLE_HEADER);
    output.push_str(TABLE_DIVIDER);

    for dp in &data.data_points {
        let clicks = dp.total_clicks();
        output.push_str(&format!(
            "│ {:<12} │ {:<15} │ {:>8} │ {:>9} │ {:>8} │ {:>8} │ {:>9} │ {:>11.1}% │\n",
            epoch_to_local(dp.start, tz).format("%Y-%m-%d"),
            truncate(&dp.template_id, TEMPLATE_ID_WIDTH),
            format_number(dp.sent),
            format_number(dp.delivered),
            format_number(dp.read),
            format_number(clicks),
            format_usd(dp.amount_spent()),
            safe_percentage(clicks, dp.delivered)
        ));
    }

    output.push_str(TABLE_BOTTOM);

    let totals = TemplateTotals::from_data_points(&data.data_points);

    output.push_str("\n📈 Summary:\n");
    output.push_str(&format!("   📤 Total Sent: {}\n", format_number(totals.sent)));
    output.push_str(&format!(
        "   📥 Total Delivered: {}\n",
        format_number(totals.delivered)
    ));
    output.push_str(&format!(
        "   👀 Total Read: {} ({:.1}%)\n",
        format_number(totals.read),
        totals.read_rate()
    ));
    output.push_str(&format!(
        "   👆 Total Clicked: {} ({:.1}%)\n",
        format_number(totals.clicked),
        totals.click_rate()
    ));
    output.push_str(&format!("   💰 Total Cost: {}\n", format_usd(totals.cost)));

    if let Some(cost_per_delivered) = totals.cost_per_delivered() {
        output.push_str(&format!(
            "   📊 Cost per Delivered: {}\n",
            format_usd_rate(cost_per_delivered)
        ));
    }

    // Breakdown is shown when the first bucket recorded any clicks
    if data.data_points[0].clicked.is_empty() {
        return output;
    }

    output.push_str("\n🔗 Click Details:\n");
    for ((action_type, button_content), count) in click_breakdown(&data.data_points) {
        output.push_str(&format!(
            "   • {}: {}: {} clicks\n",
            action_type, button_content, count
        ));
    }

    output
}
