use crate::config::GraphApiConfig;
use crate::errors::{GraphApiError, GraphApiResult};
use crate::types::{AnalyticsResponse, Granularity, TemplateAnalyticsResponse, TemplateListResponse};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Fields requested for each template in a listing
pub const TEMPLATE_LIST_FIELDS: &str = "id,name,language,status,category,components,quality_score";

/// Parameters for a template analytics query
#[derive(Debug, Clone)]
pub struct TemplateAnalyticsQuery<'a> {
    pub wbaid: &'a str,
    pub start: i64,
    pub end: i64,
    pub granularity: &'a str,
    pub metric_types: &'a [String],
    pub template_ids: &'a [String],
}

/// Graph API client for WhatsApp Business Account analytics
pub struct GraphApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl GraphApiClient {
    /// Create a client for `{base_url}/{version}`
    pub fn new(config: &GraphApiConfig) -> GraphApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("wpp-analytics/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: format!(
                "{}/{}",
                config.base_url.trim_end_matches('/'),
                config.version.trim_matches('/')
            ),
        })
    }

    #[cfg(test)]
    fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch account-level messaging analytics
    pub async fn get_analytics(
        &self,
        wbaid: &str,
        start: i64,
        end: i64,
        granularity: Granularity,
        access_token: &str,
    ) -> GraphApiResult<AnalyticsResponse> {
        info!(
            "Fetching analytics for WBA {} ({} - {}, {})",
            wbaid, start, end, granularity
        );

        let params = [
            ("fields", analytics_fields(start, end, granularity)),
            ("access_token", access_token.to_string()),
        ];
        self.get_json(wbaid, &params).await
    }

    /// Fetch per-template analytics
    pub async fn get_template_analytics(
        &self,
        query: &TemplateAnalyticsQuery<'_>,
        access_token: &str,
    ) -> GraphApiResult<TemplateAnalyticsResponse> {
        info!(
            "Fetching template analytics for WBA {} ({} templates)",
            query.wbaid,
            query.template_ids.len()
        );

        let mut params = vec![
            ("start", query.start.to_string()),
            ("end", query.end.to_string()),
            ("granularity", query.granularity.to_string()),
        ];
        if !query.metric_types.is_empty() {
            params.push(("metric_types", metric_types_param(query.metric_types)));
        }
        if !query.template_ids.is_empty() {
            params.push(("template_ids", template_ids_param(query.template_ids)));
        }
        params.push(("access_token", access_token.to_string()));

        self.get_json(&format!("{}/template_analytics", query.wbaid), &params)
            .await
    }

    /// Fetch one page of message templates
    pub async fn list_templates(
        &self,
        wbaid: &str,
        limit: u32,
        after: Option<&str>,
        access_token: &str,
    ) -> GraphApiResult<TemplateListResponse> {
        info!("Listing message templates for WBA {} (limit {})", wbaid, limit);

        let mut params = vec![
            ("fields", TEMPLATE_LIST_FIELDS.to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(after) = after.filter(|a| !a.is_empty()) {
            params.push(("after", after.to_string()));
        }
        params.push(("access_token", access_token.to_string()));

        self.get_json(&format!("{}/message_templates", wbaid), &params)
            .await
    }

    /// Issue a GET and decode a 200 response body as `T`
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> GraphApiResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        // Query string stays out of logs: it carries the access token
        debug!("GET {}", url);

        let response = self.http.get(&url).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Response status {} ({} bytes)", status, body.len());

        if status != StatusCode::OK {
            return Err(GraphApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| GraphApiError::DecodeFailed(e.to_string()))
    }
}

/// `analytics.start(S).end(E).granularity(G)` field expansion
pub fn analytics_fields(start: i64, end: i64, granularity: Granularity) -> String {
    format!(
        "analytics.start({}).end({}).granularity({})",
        start, end, granularity
    )
}

/// Metric types joined by commas; the API expects them upper-cased
pub fn metric_types_param(metric_types: &[String]) -> String {
    metric_types
        .iter()
        .map(|m| m.trim().to_uppercase())
        .collect::<Vec<_>>()
        .join(",")
}

/// Template IDs as a JSON-style array literal: `[id1,id2]`
pub fn template_ids_param(template_ids: &[String]) -> String {
    let ids: Vec<&str> = template_ids.iter().map(|id| id.trim()).collect();
    format!("[{}]", ids.join(","))
}
