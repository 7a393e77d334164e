//! Config module.
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use validate::{ensure_destination_dir, ensure_distinct_dirs, ensure_source_dir};
pub use xml::{load_config, load_config_from_xml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CORPUS_TOOLS_CONFIG";

/// Fraction of the corpus that goes to `training`.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.7;
/// Name given to a file moved into its new folder by `enfolder`.
pub const DEFAULT_ARCHIVE_NAME: &str = "archive.webarchive";

/// Corpus layout, relative to the corpus root.
pub const ALL_DIR: &str = "all";
pub const TRAINING_DIR: &str = "training";
pub const TESTING_DIR: &str = "testing";
