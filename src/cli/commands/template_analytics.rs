use super::{parse_window, ReportRequest};
use crate::errors::AppResult;
use crate::graph::{GraphApiClient, TemplateAnalyticsQuery};
use crate::reports::ReportFormatter;
use tracing::info;

/// Per-template analytics (reads, clicks, cost)
pub async fn run(client: &GraphApiClient, request: &ReportRequest<'_>) -> AppResult<String> {
    let config = request.config;
    let (start, end) = parse_window(config)?;

    let query = TemplateAnalyticsQuery {
        wbaid: &config.wbaid,
        start,
        end,
        granularity: &config.granularity,
        metric_types: &config.metric_types,
        template_ids: &config.template_ids,
    };
    let response = client
        .get_template_analytics(&query, &config.access_token)
        .await?;

    if response.data.len() > 1 {
        info!(
            "Response holds {} analytics groups; only the first is rendered",
            response.data.len()
        );
    }

    ReportFormatter::format_template_analytics(&response, &request.timezone, &request.format)
}
