//! Typed error definitions for corpus_tools.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Source path not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Destination directory not found: {0}")]
    DestinationNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Cannot sample {requested} items from a collection of {available}")]
    SampleTooLarge { requested: usize, available: usize },

    #[error("Split ratio must be strictly between 0 and 1, got {0}")]
    InvalidRatio(f64),

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl CorpusError {
    /// Stable numeric code, emitted as a structured log field.
    pub fn code(&self) -> u16 {
        match self {
            CorpusError::SourceNotFound(_) => 10,
            CorpusError::DestinationNotFound(_) => 11,
            CorpusError::NotADirectory(_) => 12,
            CorpusError::DestinationExists(_) => 13,
            CorpusError::SampleTooLarge { .. } => 20,
            CorpusError::InvalidRatio(_) => 21,
            CorpusError::Interrupted => 130,
        }
    }

    /// Short machine-friendly name used as the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            CorpusError::SourceNotFound(_) => "source_not_found",
            CorpusError::DestinationNotFound(_) => "destination_not_found",
            CorpusError::NotADirectory(_) => "not_a_directory",
            CorpusError::DestinationExists(_) => "destination_exists",
            CorpusError::SampleTooLarge { .. } => "sample_too_large",
            CorpusError::InvalidRatio(_) => "invalid_ratio",
            CorpusError::Interrupted => "interrupted",
        }
    }

    /// True for errors caused by bad user input rather than filesystem state.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CorpusError::SampleTooLarge { .. } | CorpusError::InvalidRatio(_)
        )
    }
}
