//! Graph API response shapes
//!
//! - `analytics`: account-level messaging analytics (sent/delivered per bucket)
//! - `template_analytics`: per-template analytics (read, clicks, cost)
//! - `templates`: message template listing
//! - `paging`: cursor pagination shared by list responses
//!
//! These are read-only value objects: decoded once from a response body,
//! rendered, and dropped.

pub mod analytics;
pub mod paging;
pub mod template_analytics;
pub mod templates;

pub use analytics::{
    Analytics, AnalyticsDataPoint, AnalyticsResponse, Granularity, TEMPLATE_GRANULARITY,
};
pub use paging::{Cursors, Paging};
pub use template_analytics::{
    ClickedAction, CostMetric, TemplateAnalyticsData, TemplateAnalyticsResponse,
    TemplateDataPoint, AMOUNT_SPENT,
};
pub use templates::{MessageTemplate, QualityScore, TemplateListResponse};
