use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.presence-analyzer/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.presence-analyzer/`
/// - `~/.presence-analyzer/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let analyzer_dir = home.join(".presence-analyzer");
    std::fs::create_dir_all(&analyzer_dir)?;
    std::fs::create_dir_all(analyzer_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Attempt to locate the presence CSV under the working directory.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `runtime/data/sample_data.csv`
/// 2. `data/sample_data.csv`
///
/// Returns `None` when neither path exists.
pub fn discover_data_csv() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    discover_data_csv_in(&cwd)
}

/// Same as [`discover_data_csv`] but rooted at an explicit directory.
pub fn discover_data_csv_in(base: &Path) -> Option<PathBuf> {
    let candidates = [
        base.join("runtime").join("data").join("sample_data.csv"),
        base.join("data").join("sample_data.csv"),
    ];
    candidates.into_iter().find(|p| p.exists())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
