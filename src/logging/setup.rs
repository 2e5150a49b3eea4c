use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::formatter::BracketedFormatter;

/// Install the global subscriber.
///
/// Events go to stderr so stdout stays reserved for the run summary. With a
/// `log_dir`, they are also written without colors to a timestamped file in
/// that directory, whose path is returned.
pub fn setup_logging(verbose: bool, log_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    let file_target = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {:?}", dir))?;

            let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            let log_path = dir.join(format!("dataset_splitter_{}.log", timestamp));

            let file = fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&log_path)
                .with_context(|| format!("Failed to create log file {:?}", log_path))?;
            Some((file, log_path))
        }
        None => None,
    };

    let (file_layer, log_path) = match file_target {
        Some((file, path)) => {
            let layer = fmt::layer()
                .event_format(BracketedFormatter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false);
            (Some(layer), Some(path))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .event_format(BracketedFormatter)
        .with_writer(std::io::stderr);

    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(path) = &log_path {
        info!("Log file created at: {:?}", path);
    }

    Ok(log_path)
}
