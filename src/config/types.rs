//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{ALL_DIR, DEFAULT_ARCHIVE_NAME, DEFAULT_TRAIN_RATIO, TESTING_DIR, TRAINING_DIR};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration shared by the three commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, log the planned moves but do not modify the filesystem
    pub dry_run: bool,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Share of `all` moved to `training` by split_corpus
    pub train_ratio: f64,
    /// Directory holding `all`, `training` and `testing`
    pub corpus_root: PathBuf,
    /// File name used by enfolder inside each new folder
    pub archive_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
            seed: None,
            train_ratio: DEFAULT_TRAIN_RATIO,
            corpus_root: PathBuf::from("."),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Config rooted at `corpus_root`; other fields use defaults.
    pub fn with_root(corpus_root: impl Into<PathBuf>) -> Self {
        Self {
            corpus_root: corpus_root.into(),
            ..Default::default()
        }
    }

    pub fn all_dir(&self) -> PathBuf {
        self.corpus_root.join(ALL_DIR)
    }

    pub fn training_dir(&self) -> PathBuf {
        self.corpus_root.join(TRAINING_DIR)
    }

    pub fn testing_dir(&self) -> PathBuf {
        self.corpus_root.join(TESTING_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parse_aliases() {
        assert_eq!(LogLevel::parse("QUIET"), Some(LogLevel::Quiet));
        assert_eq!(LogLevel::parse(" verbose "), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn corpus_dirs_hang_off_root() {
        let cfg = Config::with_root("/data/comics");
        assert_eq!(cfg.all_dir(), PathBuf::from("/data/comics/all"));
        assert_eq!(cfg.training_dir(), PathBuf::from("/data/comics/training"));
        assert_eq!(cfg.testing_dir(), PathBuf::from("/data/comics/testing"));
    }
}
