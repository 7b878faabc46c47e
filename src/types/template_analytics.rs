//! Per-template analytics returned by `GET /<wbaid>/template_analytics`

use super::Paging;
use serde::{Deserialize, Serialize};

/// Cost entry type holding the amount spent for a bucket
pub const AMOUNT_SPENT: &str = "amount_spent";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateAnalyticsResponse {
    #[serde(default)]
    pub data: Vec<TemplateAnalyticsData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

/// One analytics group (the API returns exactly one under normal querying)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateAnalyticsData {
    #[serde(default)]
    pub granularity: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub data_points: Vec<TemplateDataPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDataPoint {
    #[serde(default)]
    pub template_id: String,
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub delivered: u64,
    #[serde(default)]
    pub read: u64,
    #[serde(default)]
    pub clicked: Vec<ClickedAction>,
    #[serde(default)]
    pub cost: Vec<CostMetric>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClickedAction {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub button_content: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostMetric {
    #[serde(rename = "type")]
    pub metric_type: String,
    #[serde(default)]
    pub value: f64,
}

impl TemplateDataPoint {
    /// Sum of `count` over every clicked action
    pub fn total_clicks(&self) -> u64 {
        self.clicked.iter().map(|c| c.count).sum()
    }

    /// Value of the first `amount_spent` cost entry, 0 when absent
    pub fn amount_spent(&self) -> f64 {
        self.cost
            .iter()
            .find(|c| c.metric_type == AMOUNT_SPENT)
            .map(|c| c.value)
            .unwrap_or(0.0)
    }
}
