//! Account-level messaging analytics returned by the `analytics` field of a WBA node

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Graph API response for `GET /<wbaid>?fields=analytics...`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    #[serde(default)]
    pub analytics: Analytics,
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    pub granularity: String,
    #[serde(default)]
    pub data_points: Vec<AnalyticsDataPoint>,
}

/// One reporting bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsDataPoint {
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub delivered: u64,
}

/// Time-bucket size accepted by account analytics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Granularity {
    HalfHour,
    #[default]
    Day,
    Month,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::HalfHour => "HALF_HOUR",
            Granularity::Day => "DAY",
            Granularity::Month => "MONTH",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive: the Graph API only understands the upper-case spelling
impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HALF_HOUR" => Ok(Granularity::HalfHour),
            "DAY" => Ok(Granularity::Day),
            "MONTH" => Ok(Granularity::Month),
            other => Err(format!(
                "granularity must be HALF_HOUR, DAY, or MONTH (got '{}')",
                other
            )),
        }
    }
}

/// The only granularity template analytics accepts
pub const TEMPLATE_GRANULARITY: &str = "daily";
