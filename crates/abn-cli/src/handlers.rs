//! Command handlers for CLI operations

use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use abn_cli::config::AppConfig;
use abn_cli::{TuiApp, oneshot, plain_text, result_view};
use abn_client::HttpLookupClient;
use anyhow::{Context as _, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

const DEFAULT_FILTER: &str = "abn_cli=info,abn_client=info,abn_proxy=info";
const STDERR_FILTER: &str = "warn";

/// Loaded configuration plus where it came from
pub struct Settings {
    /// Effective configuration
    pub config: AppConfig,
    /// File the configuration was read from
    pub path: PathBuf,
}

/// Loads the config file, creating it with defaults when missing, then
/// applies the `--base-url` override (flag or `ABN_CHECK_BASE_URL`).
///
/// # Errors
/// Returns an error if the config cannot be located, read or parsed
pub fn load_settings(config_path: Option<PathBuf>, base_url: Option<String>) -> Result<Settings> {
    let path = match config_path {
        Some(path) => path,
        None => AppConfig::default_path()?,
    };
    let mut config = AppConfig::load_or_create(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    if let Some(base_url) = base_url {
        config.service.base_url = base_url;
    }
    Ok(Settings { config, path })
}

/// Logs to `{app_dir}/debug.log`, replacing the previous session's log
///
/// # Errors
/// Returns error if file operations fail
fn init_file_logging(app_dir: &Path) -> Result<()> {
    fs::create_dir_all(app_dir)?;
    let debug_log = app_dir.join("debug.log");
    if debug_log.exists() {
        fs::remove_file(&debug_log)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&debug_log)?;

    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .try_init()?;
    Ok(())
}

/// Logs to stderr; quiet unless `RUST_LOG` says otherwise
fn init_stderr_logging(default_filter: &str) -> Result<()> {
    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .try_init()?;
    Ok(())
}

fn lookup_client(config: &AppConfig) -> Result<HttpLookupClient> {
    HttpLookupClient::new(config.service.base_url.as_str(), config.timeout())
        .context("Failed to build HTTP client")
}

/// Runs the interactive form until the user quits
///
/// # Errors
/// Returns an error if logging, the terminal or the HTTP client fail to set up
pub async fn handle_interactive(settings: Settings) -> Result<ExitCode> {
    init_file_logging(&AppConfig::app_dir()?)?;
    info!(
        "Session started; lookups via {}",
        settings.config.service.base_url
    );

    let client = lookup_client(&settings.config)?;
    let mut app = TuiApp::new(
        Arc::new(client),
        settings.config.ui.theme,
        Some(settings.path),
    )?;

    TuiApp::enable_raw_mode()?;
    let outcome = match app.render() {
        Ok(()) => app.run_event_loop().await,
        Err(err) => Err(err),
    };
    app.disable_raw_mode()?;
    outcome?;

    info!("Session ended");
    Ok(ExitCode::SUCCESS)
}

/// Runs one search and prints the panel to stdout, or the error to stderr
///
/// # Errors
/// Returns an error if logging or the HTTP client fail to set up
pub async fn handle_search(settings: &Settings, query: &str) -> Result<ExitCode> {
    init_stderr_logging(STDERR_FILTER)?;
    let client = lookup_client(&settings.config)?;

    let state = oneshot::run_search(&client, query).await;
    let view = result_view(&state);

    if let Some(message) = &view.inline_error {
        writeln!(io::stderr(), "{message}")?;
    } else {
        write!(io::stdout(), "{}", plain_text(&view))?;
    }
    Ok(oneshot::exit_code(&state))
}

/// Serves the development proxy until interrupted
///
/// # Errors
/// Returns an error if the listener cannot be bound or serving fails
pub async fn handle_proxy(
    settings: Settings,
    listen: Option<String>,
    upstream: Option<String>,
) -> Result<ExitCode> {
    init_stderr_logging(DEFAULT_FILTER)?;
    let listen = listen.unwrap_or(settings.config.proxy.listen);
    let upstream = upstream.unwrap_or(settings.config.proxy.upstream);

    let listener = TcpListener::bind(&listen)
        .await
        .with_context(|| format!("Failed to bind {listen}"))?;

    tokio::select! {
        served = abn_proxy::serve(listener, &upstream) => served?,
        interrupted = signal::ctrl_c() => {
            interrupted?;
            warn!("Interrupted, stopping proxy");
        }
    }
    Ok(ExitCode::SUCCESS)
}
