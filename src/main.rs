//! CLI entry point for the basic_stats tool.
//!
//! Reads whitespace-separated numbers from a file (or `-` for stdin) and
//! prints mean, median, mode, standard deviation, and harmonic mean.

use anyhow::{Context, Result};
use basic_stats::input::read_source;
use basic_stats::output::{SummaryRow, append_record, write_json, write_text};
use basic_stats::summarize;
use clap::{Parser, ValueEnum};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "basic_stats")]
#[command(about = "Descriptive statistics for a list of numbers", long_about = None)]
struct Cli {
    /// File of whitespace-separated numbers, or `-` for stdin
    #[arg(value_name = "SOURCE")]
    source: String,

    /// How to print the results
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Optional: CSV file to append a timestamped result row to
    #[arg(long, value_name = "PATH")]
    append_csv: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let _file_guard = init_logging();

    let bytes = read_source(&cli.source)?;
    let summary = summarize(&bytes).with_context(|| format!("no results for `{}`", cli.source))?;

    let stdout = std::io::stdout().lock();
    match cli.format {
        Format::Text => write_text(stdout, &summary)?,
        Format::Json => write_json(stdout, &summary)?,
    }

    if let Some(path) = cli.append_csv {
        append_record(&path, &SummaryRow::new(&cli.source, &summary))
            .with_context(|| format!("failed to append results to `{path}`"))?;
        info!(path = %path, "Result row appended");
    }

    Ok(())
}

/// Logging setup: stderr always, plus a JSON daily-rolling file when
/// `LOG_FILE_PATH` is set. The returned guard flushes the file writer on drop.
fn init_logging() -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::WARN));

    let Ok(log_file_path) = std::env::var("LOG_FILE_PATH") else {
        tracing_subscriber::registry().with(stderr_layer).init();
        return None;
    };

    let log_dir = Path::new(&log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("basic_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Some(file_guard)
}

/// Filter read from `var`, falling back to `default` when the variable is
/// unset. A global level in `var` (e.g. `debug`) replaces the default.
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}
