//! Log file setup.
//!
//! Events below ERROR go to the access log, ERROR events to the error log, both
//! as JSON lines. `RUST_LOG` narrows what is recorded; the default is `info`.
//! Nothing is written to stdout.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::filter::{filter_fn, EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::fmt;

#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    #[error("error when opening log file {path}: {source}")]
    Open { path: String, source: io::Error },

    #[error("error when installing logger: {0}")]
    Init(#[from] TryInitError),
}

fn open_append(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.display().to_string(),
            source,
        })
}

/// Installs the global subscriber writing to `access_log` and `error_log`.
pub fn init(access_log: &Path, error_log: &Path) -> Result<(), LoggingError> {
    let access = open_append(access_log)?;
    let error = open_append(error_log)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let access_layer = fmt::layer()
        .json()
        .with_writer(Mutex::new(access))
        .with_filter(filter_fn(|meta| *meta.level() != Level::ERROR));
    let error_layer = fmt::layer()
        .json()
        .with_writer(Mutex::new(error))
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(access_layer)
        .with(error_layer)
        .try_init()?;
    Ok(())
}
