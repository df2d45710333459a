//! Tracing setup.
//!
//! The terminal belongs to the UI, so logs go to a file through a
//! non-blocking writer. The filter comes from `FOLIO_LOG` (default `info`).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_FILTER_ENV;

/// Keeps the background writer alive until the process exits
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Filter from `FOLIO_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `log_path`.
///
/// Without a path, or when the file cannot be opened, events are discarded:
/// writing them to stderr would corrupt the UI. Calling this twice is
/// harmless.
pub fn init_logging(log_path: Option<&Path>) {
    let file = log_path.and_then(|path| {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    match file {
        Some(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let installed = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .try_init()
                .is_ok();
            if installed {
                let _ = LOG_GUARD.set(guard);
                if let Some(path) = log_path {
                    tracing::info!(path = %path.display(), "logging initialized");
                }
            }
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::sink)
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("folio.log");

        init_logging(Some(&path));
        // Second call must not panic even though a subscriber is set
        init_logging(Some(&path));

        assert!(path.exists());
    }
}
