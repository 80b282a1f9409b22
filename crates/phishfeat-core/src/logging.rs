//! Log setup.
//!
//! Every soft failure during extraction (WHOIS miss, page fetch error, missing
//! traffic rank) is a `debug` event carrying the URL. The log file keeps them;
//! stderr shares the terminal with the progress line, so when the file cannot
//! be opened only warnings and errors are printed there.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Filter for the log file: per-URL diagnostics from the core crate.
pub const FILE_FILTER: &str = "info,phishfeat=debug,phishfeat_core=debug";

/// Filter for the stderr fallback.
pub const STDERR_FILTER: &str = "warn";

/// Where log output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

impl fmt::Display for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSink::File(path) => write!(f, "{}", path.display()),
            LogSink::Stderr => f.write_str("stderr"),
        }
    }
}

/// `RUST_LOG` when set and valid, else `default`.
fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// `~/.local/state/phishfeat/phishfeat.log`, creating the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishfeat")?;
    let dir = xdg_dirs.get_state_home().join("phishfeat");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("phishfeat.log"))
}

/// Installs the global subscriber. Logs go to the state-dir file when it can
/// be opened, otherwise to stderr. Calling it twice keeps the first subscriber.
pub fn init_logging() -> LogSink {
    match open_log_file() {
        Ok((path, file)) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(FILE_FILTER))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
            tracing::info!(path = %path.display(), "phishfeat logging initialized");
            LogSink::File(path)
        }
        Err(e) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(STDERR_FILTER))
                .with_writer(std::io::stderr)
                .try_init();
            tracing::warn!("log file unavailable ({:#}); logging to stderr", e);
            LogSink::Stderr
        }
    }
}

fn open_log_file() -> Result<(PathBuf, fs::File)> {
    let path = log_file_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}
