use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// A required flag or credential was not supplied
    #[error("{0} is required")]
    MissingRequiredField(String),

    /// Command line could not be parsed (clap has already printed the details)
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Granularity not accepted for the selected mode
    #[error("Invalid granularity: {0}")]
    InvalidGranularity(String),

    /// Date string matched none of the accepted layouts
    #[error(
        "invalid date format '{input}': expected ISO-8601 datetime (YYYY-MM-DDTHH:MM:SSZ) or date (YYYY-MM-DD)"
    )]
    InvalidDateFormat { input: String },

    /// Start of the reporting window falls after its end
    #[error("start date ({start}) must not be after end date ({end})")]
    InvalidDateRange { start: i64, end: i64 },

    /// Page size for template listing must be positive
    #[error("limit must be a positive number, got {0}")]
    InvalidLimit(i64),

    /// IANA timezone name could not be resolved
    #[error("Error loading timezone '{name}': {reason}")]
    TimezoneLoad { name: String, reason: String },

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the access token from the terminal failed
    #[error("Error reading access token: {0}")]
    Prompt(String),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON export of a decoded response
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Graph API operations
    #[error("Error making request: {0}")]
    GraphApi(#[from] GraphApiError),
}

/// Graph API error types
#[derive(Error, Debug)]
pub enum GraphApiError {
    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("failed to make request: {0}")]
    RequestFailed(String),

    /// Graph API answered with a non-200 status
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON shape
    #[error("failed to parse response: {0}")]
    DecodeFailed(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for Graph API operations
pub type GraphApiResult<T> = Result<T, GraphApiError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for GraphApiError {
    fn from(err: reqwest::Error) -> Self {
        GraphApiError::RequestFailed(err.to_string())
    }
}
