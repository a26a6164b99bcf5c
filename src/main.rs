//! CLI entry point for the bikeshare explorer.
//!
//! Purely interactive: prompts and statistics on stdout, diagnostics on
//! stderr plus a JSON rolling log file.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use bikeshare_explorer::session;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: stderr for warnings + JSON rolling log file.
    // Stderr stays quiet by default so log lines don't interleave with
    // the interactive prompts.
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let data_dir = PathBuf::from(
        std::env::var("BIKESHARE_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
    );
    info!(data_dir = %data_dir.display(), "Starting bikeshare explorer");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    session::run(&mut input, &mut out, &data_dir)
}
