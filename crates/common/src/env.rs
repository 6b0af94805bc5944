//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the store is opened.

use std::path::Path;

use tracing::{info, warn};

/// Ensure the parent directory of a SQLite file url exists.
///
/// Accepts urls such as `sqlite://data/ads.db?mode=rwc` or `sqlite:ads.db`.
/// In-memory urls are left alone.
pub async fn ensure_store_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(database_url) else {
        return Ok(());
    };
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
            info!(dir = %parent.display(), "store directory ready");
        }
        _ => {}
    }
    if tokio::fs::metadata(path).await.is_err() {
        warn!(%path, "store file not found; it will be created");
    }
    Ok(())
}

/// Extract the file path component from a `sqlite:` url, `None` for in-memory stores.
pub fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path)
}
