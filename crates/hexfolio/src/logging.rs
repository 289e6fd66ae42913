//! File logging.
//!
//! The terminal belongs to the UI, so records go to a file in the
//! platform data directory instead of stderr.

use std::fs::{self, File};
use std::path::PathBuf;

use env_logger::{Env, Target};

/// Name of the log file inside the data directory.
const LOG_FILE: &str = "hexfolio.log";

/// Path of the log file, if a data directory is available.
pub fn log_path() -> Option<PathBuf> {
    hexfolio_config::project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE))
}

/// Install the logger, filtered by `RUST_LOG` (default `info`).
///
/// Returns the log file path. If the file cannot be opened logging stays
/// disabled.
pub fn init() -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = File::options().create(true).append(true).open(&path).ok()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .ok()?;
    Some(path)
}
