use std::path::PathBuf;
use thiserror::Error;

/// Result type for split operations
pub type SplitResult<T> = Result<T, SplitError>;

/// Error types for dataset splitting
#[derive(Debug, Error)]
pub enum SplitError {
    /// Source directory does not exist
    #[error("Directory specified by --datapath not found.")]
    InvalidPath(PathBuf),

    /// Ratios leave no room for validation, or are out of range
    #[error("train_pct + test_pct must be less than 1.0, leaving room for validation.")]
    InvalidRatio { train_pct: f64, test_pct: f64 },

    #[error("Copy failed from {src:?} to {dest:?}: {source}")]
    FileCopy {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list files under {path:?}: {reason}")]
    ListFiles { path: PathBuf, reason: String },

    #[error("Failed to write split report {path:?}: {reason}")]
    Report { path: PathBuf, reason: String },
}

impl SplitError {
    /// Whether this error is a rejected invocation rather than a failure
    /// during the run. The binary terminates early on these.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            SplitError::InvalidPath(_) | SplitError::InvalidRatio { .. }
        )
    }
}
