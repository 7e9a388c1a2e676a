//! FILENAME: app/src/commands.rs
//! Command-line entry points: argument definitions and the render command.

use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum};
use grid_engine::render_grid;
use nakamoto::RecordProvider;
use crate::config::TableConfig;
use crate::logging::{self, LOG_LEVEL_ENV, LOG_PATH_ENV};
use crate::render::render_text;
use crate::{log_enter, log_error, log_exit, log_info};

/// Render the Nakamoto coefficient table
#[derive(Parser, Debug)]
#[command(name = "nakamoto-table")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON table config; the built-in table is used when omitted
    #[arg(value_name = "CONFIG", conflicts_with = "config")]
    pub config_file: Option<PathBuf>,

    /// Same as the positional CONFIG argument
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log file path (overrides NAKAMOTO_TABLE_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The config path from `--config` or the positional argument.
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref().or(self.config_file.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text table
    Text,
    /// Grid model as JSON, for an external renderer
    Json,
}

/// Installs the logger and opens the log file if one is configured.
/// A log file that cannot be opened leaves logging on stderr.
fn setup_logging(cli: &Cli) {
    let level = std::env::var(LOG_LEVEL_ENV)
        .map(|name| logging::parse_level(&name))
        .unwrap_or(log::LevelFilter::Warn);
    logging::install_logger(level);

    let path = cli
        .log_file
        .clone()
        .or_else(|| std::env::var_os(LOG_PATH_ENV).map(PathBuf::from));

    if let Some(path) = path {
        if let Err(e) = logging::init_log_file(&path) {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }
}

/// Builds the grid for `config` and renders it in the requested format.
pub fn render_table(config: &TableConfig, format: OutputFormat) -> Result<String, String> {
    log_enter!("TABLE", "render_table", "format={:?}", format);

    let records = config.records();
    let view = render_grid(&config.columns, &records).map_err(|e| {
        log_error!("TABLE", "schema rejected: {}", e);
        e.to_string()
    })?;

    let output = match format {
        OutputFormat::Text => render_text(&view, config.title.as_deref()),
        OutputFormat::Json => serde_json::to_string_pretty(&view)
            .map_err(|e| format!("Failed to serialize grid: {}", e))?,
    };

    log_exit!("TABLE", "render_table", "rows={} cols={}", view.row_count(), view.column_count());
    Ok(output)
}

/// Runs the command line: load the config (or the built-in table) and render it.
pub fn run(cli: Cli) -> Result<String, String> {
    setup_logging(&cli);

    let config = match cli.config_path() {
        Some(path) => TableConfig::load(path)?,
        None => {
            log_info!("CONFIG", "no config given, using built-in table");
            TableConfig::builtin()
        }
    };

    render_table(&config, cli.format)
}
