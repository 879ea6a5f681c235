//! File logging setup.
//!
//! Logs go to `$XDG_STATE_HOME/dotspin/dotspin.log` (or
//! `~/.local/state/dotspin/`) so they never mix with spinner output on the
//! terminal. The filter is read from `DOTSPIN_LOG` and defaults to `warn`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

const LOG_ENV: &str = "DOTSPIN_LOG";
const LOG_FILE: &str = "dotspin.log";

/// Install the global subscriber.
///
/// Returns the guard that flushes buffered lines on drop, or `None` when the
/// log file can't be opened (logging is then disabled).
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;

    let appender = appender(&dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_thread_names(true)
        .try_init()
        .ok()?;
    Some(guard)
}

fn appender(dir: &Path) -> Option<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .ok()
}

fn log_dir() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_STATE_HOME") {
        Some(state_home) => PathBuf::from(state_home),
        None => home::home_dir()?.join(".local/state"),
    };
    Some(base.join("dotspin"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appender_creates_log_file() {
        let dir = TempDir::new().unwrap();
        assert!(appender(dir.path()).is_some());
        assert!(dir.path().join(LOG_FILE).is_file());
    }

    #[test]
    fn test_unopenable_log_file_disables_logging() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(LOG_FILE)).unwrap();
        assert!(appender(dir.path()).is_none());
    }
}
