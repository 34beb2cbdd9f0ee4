mod bootstrap;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use presence_api::{app, AppState};
use presence_core::settings::Settings;
use presence_data::directory::UserDirectory;
use presence_runtime::log_cache::LogCache;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Presence Analyzer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_csv = settings
        .data_csv
        .clone()
        .or_else(bootstrap::discover_data_csv)
        .context("no presence CSV found; pass --data-csv or place runtime/data/sample_data.csv")?;

    tracing::info!(
        "Data: {}, TTL: {}s, Bind: {}:{}",
        data_csv.display(),
        settings.cache_ttl,
        settings.host,
        settings.port
    );

    let cache = Arc::new(LogCache::new(
        data_csv,
        Duration::from_secs(settings.cache_ttl),
    ));

    let directory = Arc::new(match settings.users_file.as_deref() {
        Some(path) => UserDirectory::load_from(path),
        None => UserDirectory::empty(),
    });

    let router = app(
        AppState::new(cache, directory),
        settings.static_dir.as_deref(),
    );

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", settings.host, settings.port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Serving dashboard API");

    let server = axum::serve(listener, router);
    tokio::select! {
        result = server => {
            result.context("server error")?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
