//! Account analytics report
//!
//! One row per reporting bucket, in the order the API returned them, followed
//! by raw sent/delivered totals.

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::{AnalyticsResponse, Granularity};
use crate::utils::time::epoch_to_local;
use chrono_tz::Tz;

const TABLE_TOP: &str = "╭──────────────┬─────────────────┬─────────────┬─────────────╮\n";
const TABLE_HEADER: &str = "│     Date     │   Time Range    │    Sent     │  Delivered  │\n";
const TABLE_DIVIDER: &str = "├──────────────┼─────────────────┼─────────────┼─────────────┤\n";
const TABLE_BOTTOM: &str = "╰──────────────┴─────────────────┴─────────────┴─────────────╯\n";

/// Format account analytics for console output
pub fn format_account_analytics(
    response: &AnalyticsResponse,
    tz: &Tz,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Console => Ok(render_console(response, tz)),
        OutputFormat::Json => export_json(response),
    }
}

fn render_console(response: &AnalyticsResponse, tz: &Tz) -> String {
    let analytics = &response.analytics;
    let mut output = String::new();

    output.push_str(&format!("📱 WhatsApp Business Account: {}\n", response.id));
    output.push_str(&format!(
        "📞 Phone Numbers: {}\n",
        analytics.phone_numbers.join(", ")
    ));
    output.push_str(&format!("⏱️  Granularity: {}\n", analytics.granularity));
    output.push_str(&format!("📊 Data Points: {}\n", analytics.data_points.len()));
    output.push_str(&format!("🌎 Timezone: {}\n\n", tz.name()));

    if analytics.data_points.is_empty() {
        output.push_str("❌ No data points found.\n");
        return output;
    }

    output.push_str(TABLE_TOP);
    output.push_str(TABLE_HEADER);
    output.push_str(TABLE_DIVIDER);

    let mut total_sent: u64 = 0;
    let mut total_delivered: u64 = 0;

    for dp in &analytics.data_points {
        let (date, time_range) = format_time_range(dp.start, dp.end, tz, &analytics.granularity);
        output.push_str(&format!(
            "│ {:<12} │ {:<15} │ {:>11} │ {:>11} │\n",
            date,
            time_range,
            format_number(dp.sent),
            format_number(dp.delivered)
        ));

        total_sent += dp.sent;
        total_delivered += dp.delivered;
    }

    output.push_str(TABLE_BOTTOM);

    output.push_str("\n📈 Summary:\n");
    output.push_str(&format!("   📤 Total Sent: {}\n", format_number(total_sent)));
    output.push_str(&format!(
        "   📥 Total Delivered: {}\n",
        format_number(total_delivered)
    ));
    output.push_str("   ℹ️  Note: Delivered messages may arrive after the reporting period\n");

    output
}

/// Date and time-range cells for a bucket
///
/// Monthly buckets show `YYYY-MM` and `Mon DD - Mon DD`; every other
/// granularity (including unknown ones) shows `YYYY-MM-DD` and `HH:MM - HH:MM`.
pub fn format_time_range(start: i64, end: i64, tz: &Tz, granularity: &str) -> (String, String) {
    let start_time = epoch_to_local(start, tz);
    let end_time = epoch_to_local(end, tz);

    match granularity.parse::<Granularity>() {
        Ok(Granularity::Month) => (
            start_time.format("%Y-%m").to_string(),
            format!(
                "{} - {}",
                start_time.format("%b %d"),
                end_time.format("%b %d")
            ),
        ),
        _ => (
            start_time.format("%Y-%m-%d").to_string(),
            format!(
                "{} - {}",
                start_time.format("%H:%M"),
                end_time.format("%H:%M")
            ),
        ),
    }
}
