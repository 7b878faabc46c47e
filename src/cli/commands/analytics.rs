use super::{parse_window, ReportRequest};
use crate::errors::{AppError, AppResult};
use crate::graph::GraphApiClient;
use crate::reports::ReportFormatter;
use crate::types::Granularity;
use tracing::info;

/// Account-level sent/delivered analytics
pub async fn run(client: &GraphApiClient, request: &ReportRequest<'_>) -> AppResult<String> {
    let config = request.config;
    let granularity = config
        .granularity
        .parse::<Granularity>()
        .map_err(AppError::InvalidGranularity)?;
    let (start, end) = parse_window(config)?;

    let response = client
        .get_analytics(&config.wbaid, start, end, granularity, &config.access_token)
        .await?;
    info!(
        "Received {} analytics data points",
        response.analytics.data_points.len()
    );

    ReportFormatter::format_account_analytics(&response, &request.timezone, &request.format)
}
