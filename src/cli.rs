//! CLI definitions for the three binaries.
//!
//! Notes:
//! - Every binary flattens `CommonArgs` (logging, seed, dry-run, --print-config).
//! - --debug is a shorthand for --log-level debug and wins over it.
//! - CLI values override the config file.

use clap::{Args, Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};

/// Flags shared by enfolder, mv_random and split_corpus.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Seed the random generator for a reproducible selection.
    #[arg(long, value_name = "N", help = "Seed for shuffling/sampling (default: OS entropy)")]
    pub seed: Option<u64>,

    /// Dry-run: log actions but do not modify the filesystem.
    #[arg(long, help = "Show what would be moved, but do not modify files/directories")]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Also append logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath, help = "Append logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where the config file is looked up, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,
}

impl CommonArgs {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config value).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = Some(path.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

/// Move each file into a new folder named after it, minus the extension.
#[derive(Parser, Debug, Clone)]
#[command(name = "enfolder", author, version)]
pub struct EnfolderArgs {
    /// Files to move; `report.webarchive` ends up as `report/<ARCHIVE_NAME>`.
    #[arg(
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        required_unless_present = "print_config"
    )]
    pub files: Vec<PathBuf>,

    /// File name given inside each new folder (default: archive.webarchive).
    #[arg(long, value_name = "NAME")]
    pub archive_name: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl EnfolderArgs {
    pub fn apply_overrides(&self, cfg: &mut Config) {
        self.common.apply_overrides(cfg);
        if let Some(name) = &self.archive_name {
            cfg.archive_name = name.clone();
        }
    }
}

/// Move a given number of random entries from one directory to another. Hidden entries are ignored.
#[derive(Parser, Debug, Clone)]
#[command(name = "mv_random", author, version)]
pub struct MvRandomArgs {
    /// The directory to move entries from.
    #[arg(
        value_name = "FROM_DIR",
        value_hint = ValueHint::DirPath,
        required_unless_present = "print_config"
    )]
    pub from_dir: Option<PathBuf>,

    /// The directory to move entries to (must exist).
    #[arg(
        value_name = "TO_DIR",
        value_hint = ValueHint::DirPath,
        required_unless_present = "print_config"
    )]
    pub to_dir: Option<PathBuf>,

    /// How many entries to move.
    #[arg(value_name = "COUNT", required_unless_present = "print_config")]
    pub count: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl MvRandomArgs {
    pub fn apply_overrides(&self, cfg: &mut Config) {
        self.common.apply_overrides(cfg);
    }
}

/// Shuffle `all/` and split it into `training/` and `testing/` (70/30 by default).
#[derive(Parser, Debug, Clone)]
#[command(name = "split_corpus", author, version)]
pub struct SplitCorpusArgs {
    /// Directory holding all/, training/ and testing/ (default: current directory).
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Share of entries moved to training/, strictly between 0 and 1 (default: 0.7).
    #[arg(long, value_name = "RATIO")]
    pub ratio: Option<f64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl SplitCorpusArgs {
    pub fn apply_overrides(&self, cfg: &mut Config) {
        self.common.apply_overrides(cfg);
        if let Some(root) = &self.root {
            cfg.corpus_root = root.clone();
        }
        if let Some(ratio) = self.ratio {
            cfg.train_ratio = ratio;
        }
    }
}
