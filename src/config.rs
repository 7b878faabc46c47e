use crate::errors::{AppError, AppResult};
use crate::types::{Granularity, TEMPLATE_GRANULARITY};
use clap::ValueEnum;
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "wpp-analytics";

/// Application configuration loaded from wpp-analytics.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub graph_api: GraphApiConfig,
    pub display: DisplayConfig,
}

/// Graph API endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphApiConfig {
    pub base_url: String,
    pub version: String,
}

impl Default for GraphApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://graph.facebook.com".to_string(),
            version: "v23.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub timezone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: "America/Sao_Paulo".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables
    ///
    /// Environment variables take precedence over file configuration. With
    /// `path` unset, `wpp-analytics.toml` is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let api_defaults = GraphApiConfig::default();
        let display_defaults = DisplayConfig::default();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .set_default("graph_api.base_url", api_defaults.base_url)?
            .set_default("graph_api.version", api_defaults.version)?
            .set_default("display.timezone", display_defaults.timezone)?
            .add_source(file)
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        if let Ok(base_url) = env::var("GRAPH_API_BASE_URL") {
            app_config.graph_api.base_url = base_url;
        }
        if let Ok(version) = env::var("GRAPH_API_VERSION") {
            app_config.graph_api.version = version;
        }
        if let Ok(timezone) = env::var("WPP_DEFAULT_TIMEZONE") {
            app_config.display.timezone = timezone;
        }

        Ok(app_config)
    }

    /// Built-in defaults, used when no configuration can be loaded
    pub fn get_defaults() -> Self {
        Self {
            graph_api: GraphApiConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Which report to fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Account-level sent/delivered analytics
    #[default]
    Analytics,
    /// Per-template analytics (reads, clicks, cost)
    Template,
    /// Message template listing
    ListTemplates,
}

impl Mode {
    /// Whether the mode queries a reporting window
    pub fn needs_date_range(&self) -> bool {
        !matches!(self, Mode::ListTemplates)
    }
}

/// Everything one invocation needs, as supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub wbaid: String,
    pub start_date: String,
    pub end_date: String,
    pub granularity: String,
    pub timezone: String,
    pub mode: Mode,
    pub metric_types: Vec<String>,
    pub template_ids: Vec<String>,
    pub limit: i64,
    pub after: Option<String>,
    pub access_token: String,
}

/// Checks a [`ReportConfig`] before any request is made
#[derive(Debug, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate every field, including the access token
    pub fn validate(&self, config: &ReportConfig) -> AppResult<()> {
        self.validate_request(config)?;

        if config.access_token.trim().is_empty() {
            return Err(AppError::MissingRequiredField("access token".to_string()));
        }

        Ok(())
    }

    /// Validate the request flags; the access token is checked by [`Self::validate`]
    pub fn validate_request(&self, config: &ReportConfig) -> AppResult<()> {
        if config.wbaid.is_empty() {
            return Err(AppError::MissingRequiredField("WBA ID".to_string()));
        }

        if config.mode.needs_date_range() {
            if config.start_date.is_empty() {
                return Err(AppError::MissingRequiredField("start date".to_string()));
            }
            if config.end_date.is_empty() {
                return Err(AppError::MissingRequiredField("end date".to_string()));
            }
        }

        match config.mode {
            Mode::Analytics => {
                config
                    .granularity
                    .parse::<Granularity>()
                    .map_err(AppError::InvalidGranularity)?;
            }
            Mode::Template => {
                if config.granularity != TEMPLATE_GRANULARITY {
                    return Err(AppError::InvalidGranularity(format!(
                        "granularity for templates must be {} (got '{}')",
                        TEMPLATE_GRANULARITY, config.granularity
                    )));
                }
                if config.template_ids.is_empty() {
                    return Err(AppError::MissingRequiredField(
                        "template IDs (-templates)".to_string(),
                    ));
                }
                if config.metric_types.is_empty() {
                    return Err(AppError::MissingRequiredField(
                        "metric types (-metrics)".to_string(),
                    ));
                }
            }
            Mode::ListTemplates => {
                if config.limit <= 0 {
                    return Err(AppError::InvalidLimit(config.limit));
                }
            }
        }

        Ok(())
    }
}
