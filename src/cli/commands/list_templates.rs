use super::ReportRequest;
use crate::errors::{AppError, AppResult};
use crate::graph::GraphApiClient;
use crate::reports::ReportFormatter;
use tracing::info;

/// One page of message templates
pub async fn run(client: &GraphApiClient, request: &ReportRequest<'_>) -> AppResult<String> {
    let config = request.config;
    let limit = u32::try_from(config.limit)
        .ok()
        .filter(|limit| *limit > 0)
        .ok_or(AppError::InvalidLimit(config.limit))?;

    let response = client
        .list_templates(
            &config.wbaid,
            limit,
            config.after.as_deref(),
            &config.access_token,
        )
        .await?;
    info!("Received {} templates", response.data.len());

    ReportFormatter::format_template_list(&response, &request.format)
}
