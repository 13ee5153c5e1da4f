//! Error types shared by the parser, the geometry layer and the strategies.
//!
//! Only malformed input and invalid configuration are surfaced as errors.
//! Per-step numerical degeneracies (zero transition weight, zero-length
//! paths, exhausted tabu neighborhoods) are recovered inside the strategies.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type TspResult<T> = std::result::Result<T, TspError>;

/// Errors raised before or outside the search loop.
#[derive(Error, Debug)]
pub enum TspError {
    /// The instance text is malformed: missing section markers or an
    /// unparsable coordinate line.
    #[error("{}{}: {cause}", .file.display(), line_suffix(.line))]
    InputFormat {
        file: PathBuf,
        line: Option<usize>,
        cause: String,
    },

    /// The instance file could not be read.
    #[error("failed to read {}: {source}", .file.display())]
    Io {
        file: PathBuf,
        source: std::io::Error,
    },

    /// Fewer than two cities; no tour is meaningful.
    #[error("instance has {cities} cities, at least 2 are required")]
    DegenerateInstance { cities: usize },

    /// Invalid solver configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A city index outside `0..size`.
    #[error("city index {index} out of range for {size} cities")]
    InvalidIndex { index: usize, size: usize },
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" line {l}")).unwrap_or_default()
}

impl TspError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        TspError::Config(msg.into())
    }
}
