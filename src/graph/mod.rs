//! Facebook Graph API integration
//!
//! One blocking-in-spirit request per invocation: no retries, no caching,
//! no concurrency. Transport defaults (timeouts, TLS) are reqwest's.

pub mod client;

pub use client::{GraphApiClient, TemplateAnalyticsQuery, TEMPLATE_LIST_FIELDS};
