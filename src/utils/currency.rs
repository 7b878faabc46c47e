//! Currency formatting for template cost figures
//!
//! The Graph API reports spend as a bare float in the account currency;
//! it is shown with a dollar sign.

/// Format an amount with cent precision
///
/// # Examples
/// ```
/// use wpp_analytics_cli::utils::currency::format_usd;
///
/// assert_eq!(format_usd(6.18), "$6.18");
/// assert_eq!(format_usd(0.0), "$0.00");
/// ```
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a per-unit rate with four decimals
///
/// # Examples
/// ```
/// use wpp_analytics_cli::utils::currency::format_usd_rate;
///
/// assert_eq!(format_usd_rate(6.22 / 795.0), "$0.0078");
/// ```
pub fn format_usd_rate(amount: f64) -> String {
    format!("${:.4}", amount)
}
