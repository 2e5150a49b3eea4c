//! Logging for the dataset splitter
//!
//! This module provides:
//! - Custom log formatting with bracketed output
//! - Logging to stderr, plus an optional timestamped log file

mod formatter;
mod setup;

pub use setup::setup_logging;
