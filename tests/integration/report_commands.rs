//! Report commands end to end: flags in, one request, formatted text out

use anyhow::Result;
use chrono_tz::Tz;
use wpp_analytics_cli::cli::commands::{run_report, ReportRequest};
use wpp_analytics_cli::config::{Mode, ReportConfig};
use wpp_analytics_cli::errors::{AppError, GraphApiError};
use wpp_analytics_cli::reports::OutputFormat;
use wpp_analytics_cli::types::AnalyticsResponse;

use crate::common::create_test_client;
use crate::common::fixtures::{
    ANALYTICS_RESPONSE, GRAPH_ERROR_RESPONSE, TEMPLATE_ANALYTICS_RESPONSE, TEMPLATE_LIST_RESPONSE,
    WBA_ID,
};
use crate::common::mock_server::serve_once;

fn report_config(mode: Mode) -> ReportConfig {
    ReportConfig {
        wbaid: WBA_ID.to_string(),
        start_date: "2025-06-21T03:00:00Z".to_string(),
        end_date: "2025-06-23T03:00:00Z".to_string(),
        granularity: "DAY".to_string(),
        timezone: "UTC".to_string(),
        mode,
        limit: 25,
        access_token: "test-token".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_analytics_report() -> Result<()> {
    let server = serve_once(200, ANALYTICS_RESPONSE).await;
    let client = create_test_client(&server.base_url);
    let config = report_config(Mode::Analytics);
    let request = ReportRequest {
        config: &config,
        timezone: Tz::UTC,
        format: OutputFormat::Console,
    };

    let report = run_report(&client, &request).await?;

    assert!(report.contains("📱 WhatsApp Business Account: 932157148829117"));
    assert!(report.contains("📤 Total Sent: 615"));
    assert!(report.contains("📥 Total Delivered: 639"));

    let target = server.received_target().await;
    assert!(target.contains("analytics.start(1750474800).end(1750647600).granularity(DAY)"));
    Ok(())
}

#[tokio::test]
async fn test_analytics_report_json() -> Result<()> {
    let server = serve_once(200, ANALYTICS_RESPONSE).await;
    let client = create_test_client(&server.base_url);
    let config = report_config(Mode::Analytics);
    let request = ReportRequest {
        config: &config,
        timezone: Tz::UTC,
        format: OutputFormat::Json,
    };

    let report = run_report(&client, &request).await?;
    let decoded: AnalyticsResponse = serde_json::from_str(&report)?;
    assert_eq!(decoded.analytics.data_points.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_template_report() -> Result<()> {
    let server = serve_once(200, TEMPLATE_ANALYTICS_RESPONSE).await;
    let client = create_test_client(&server.base_url);
    let mut config = report_config(Mode::Template);
    config.granularity = "daily".to_string();
    config.metric_types = vec!["sent".to_string(), "clicked".to_string()];
    config.template_ids = vec!["1026573095658757".to_string()];
    let request = ReportRequest {
        config: &config,
        timezone: Tz::UTC,
        format: OutputFormat::Console,
    };

    let report = run_report(&client, &request).await?;

    for expected in [
        "📤 Total Sent: 871",
        "📥 Total Delivered: 795",
        "👀 Total Read: 435",
        "👆 Total Clicked: 60",
        "💰 Total Cost: $6.22",
        "quick_reply_button: Quero negociar: 60 clicks",
    ] {
        assert!(report.contains(expected), "missing: {}", expected);
    }
    Ok(())
}

#[tokio::test]
async fn test_list_templates_report() -> Result<()> {
    let server = serve_once(200, TEMPLATE_LIST_RESPONSE).await;
    let client = create_test_client(&server.base_url);
    let mut config = report_config(Mode::ListTemplates);
    config.start_date.clear();
    config.end_date.clear();
    config.limit = 2;
    let request = ReportRequest {
        config: &config,
        timezone: Tz::UTC,
        format: OutputFormat::Console,
    };

    let report = run_report(&client, &request).await?;

    assert!(report.contains("📊 Total Templates: 2"));
    assert!(report.contains("⏳ PENDING: 1"));
    assert!(report.contains("Use: -after=\"QVFIUmx1WDRhSXlRS2RmVGNfZA\" to get next page"));

    let target = server.received_target().await;
    assert!(target.contains("limit=2"));
    Ok(())
}

#[tokio::test]
async fn test_reversed_window_fails_before_request() {
    // No server: the command must fail on the dates alone
    let client = create_test_client("http://127.0.0.1:9");
    let mut config = report_config(Mode::Analytics);
    std::mem::swap(&mut config.start_date, &mut config.end_date);
    let request = ReportRequest {
        config: &config,
        timezone: Tz::UTC,
        format: OutputFormat::Console,
    };

    let err = run_report(&client, &request).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidDateRange { .. }), "{:?}", err);
}

#[tokio::test]
async fn test_api_error_surfaces_status_and_body() {
    let server = serve_once(403, GRAPH_ERROR_RESPONSE).await;
    let client = create_test_client(&server.base_url);
    let config = report_config(Mode::Analytics);
    let request = ReportRequest {
        config: &config,
        timezone: Tz::UTC,
        format: OutputFormat::Console,
    };

    let err = run_report(&client, &request).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::GraphApi(GraphApiError::Status { status: 403, .. })
    ));
    let message = err.to_string();
    assert!(message.contains("403"));
    assert!(message.contains("OAuthException"));
}
