use crate::config::{AppConfig, ConfigValidator, Mode, ReportConfig};
use crate::errors::{AppError, AppResult};
use crate::graph::GraphApiClient;
use crate::prompt::{load_access_token, prompt_for_token};
use crate::reports::OutputFormat;
use crate::utils::time::resolve_timezone;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{info, warn};

pub mod commands;

/// WhatsApp Business Account analytics from the Facebook Graph API
#[derive(Parser, Debug)]
#[command(name = "wpp-analytics")]
#[command(about = "WhatsApp Business Account analytics from the Facebook Graph API")]
#[command(version)]
pub struct Cli {
    /// WBA ID (required)
    #[arg(long)]
    pub wbaid: Option<String>,

    /// Start date in ISO-8601 format: YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ
    #[arg(long)]
    pub start: Option<String>,

    /// End date in ISO-8601 format: YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ
    #[arg(long)]
    pub end: Option<String>,

    /// Granularity: HALF_HOUR, DAY, or MONTH (analytics); daily (template)
    #[arg(long, default_value = "DAY")]
    pub granularity: String,

    /// Timezone for date display (overrides display.timezone, default America/Sao_Paulo)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Report to fetch
    #[arg(long, value_enum, default_value_t = Mode::Analytics)]
    pub mode: Mode,

    /// Comma-separated metric types, e.g. sent,delivered,read,clicked,cost (template mode)
    #[arg(long, value_delimiter = ',')]
    pub metrics: Vec<String>,

    /// Comma-separated template IDs (template mode)
    #[arg(long, value_delimiter = ',')]
    pub templates: Vec<String>,

    /// Number of templates per page (list-templates mode)
    #[arg(long, default_value_t = 25, allow_negative_numbers = true)]
    pub limit: i64,

    /// Pagination cursor from a previous listing (list-templates mode)
    #[arg(long)]
    pub after: Option<String>,

    /// Output format: console or json
    #[arg(long, default_value = "console")]
    pub output: String,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Configuration file (default: ./wpp-analytics.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Per-invocation request; the access token is filled in later
    pub fn to_report_config(&self, app_config: &AppConfig) -> ReportConfig {
        ReportConfig {
            wbaid: self.wbaid.clone().unwrap_or_default(),
            start_date: self.start.clone().unwrap_or_default(),
            end_date: self.end.clone().unwrap_or_default(),
            granularity: self.granularity.clone(),
            timezone: self
                .timezone
                .clone()
                .unwrap_or_else(|| app_config.display.timezone.clone()),
            mode: self.mode,
            metric_types: non_empty(&self.metrics),
            template_ids: non_empty(&self.templates),
            limit: self.limit,
            after: self.after.clone().filter(|a| !a.is_empty()),
            access_token: String::new(),
        }
    }
}

fn non_empty(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rewrite Go-style single-dash long flags (`-wbaid=X`) to `--wbaid=X`
///
/// Only names that match a declared long flag are touched, so values such as
/// `-03:00` pass through unchanged.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let long_names: Vec<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .collect();

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let rewritten = arg
                .to_str()
                .filter(|s| is_single_dash_long(s, &long_names))
                .map(|s| format!("-{}", s));
            rewritten.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}

fn is_single_dash_long(arg: &str, long_names: &[&str]) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    name.len() > 1 && long_names.contains(&name)
}

/// Parse the command line, returning `None` once `--help`/`--version` are printed
///
/// Any other clap error is printed and becomes `AppError::InvalidArguments`,
/// so bad flags exit with the same status as failed validation.
pub fn parse_cli<I, T>(args: I) -> AppResult<Option<Cli>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match Cli::try_parse_from(normalize_args(args)) {
        Ok(cli) => Ok(Some(cli)),
        Err(e) if !e.use_stderr() => {
            e.print()?;
            Ok(None)
        }
        Err(e) => {
            e.print()?;
            Err(AppError::InvalidArguments(
                e.kind().as_str().unwrap_or("unrecognised input").to_string(),
            ))
        }
    }
}

pub async fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "warn" if not set)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = match parse_cli(std::env::args_os())? {
        Some(cli) => cli,
        None => return Ok(()),
    };

    let app_config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) if cli.config.is_some() => return Err(e.into()),
        Err(e) => {
            warn!("Failed to load configuration: {}; using defaults", e);
            AppConfig::get_defaults()
        }
    };

    let mut report_config = cli.to_report_config(&app_config);
    let validator = ConfigValidator::new();

    if let Err(e) = validator.validate_request(&report_config) {
        if matches!(e, AppError::MissingRequiredField(_)) {
            eprintln!("{}", Cli::command().render_usage());
            eprintln!("Date formats: YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ");
        }
        return Err(e);
    }

    report_config.access_token = load_access_token(prompt_for_token)?;
    validator.validate(&report_config)?;

    let request = commands::ReportRequest {
        config: &report_config,
        timezone: resolve_timezone(&report_config.timezone),
        format: OutputFormat::parse(&cli.output),
    };

    info!("Configuration:");
    info!("  Mode: {:?}", report_config.mode);
    info!("  WBA ID: {}", report_config.wbaid);
    info!("  Graph API: {}/{}", app_config.graph_api.base_url, app_config.graph_api.version);
    info!("  Timezone: {}", request.timezone.name());

    let client = GraphApiClient::new(&app_config.graph_api)?;
    let report = commands::run_report(&client, &request).await?;

    match &cli.output_file {
        Some(path) => commands::write_output_to_file(path, &report)?,
        None => print!("{}", report),
    }

    Ok(())
}
