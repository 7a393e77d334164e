//! Core library for `corpus_tools`.
//!
//! Three small corpus-preparation commands built on one idea: list the
//! non-hidden entries of a directory, pick a random subset (or a shuffled
//! split), and move each entry without ever overwriting a destination.
//!
//! - [`partition`]: listing, uniform shuffle/split and sampling without replacement.
//! - [`fs_ops`]: single-item relocation (rename, or copy + remove across filesystems).
//! - [`commands`]: `enfolder`, `mv_random`, `split_corpus` as library functions.
//! - [`app`]: the shared CLI bootstrap used by the binaries.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod output;
pub mod partition;
pub mod platform;
pub mod shutdown;

pub use commands::{MoveReport, Moved, SplitReport, enfolder, mv_random, split_corpus};
pub use config::{
    Config, LogLevel, default_config_path, load_config,
    load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use errors::CorpusError;
pub use partition::{Item, Partition, list_collection, make_rng, sample, split};

/// Convenience prelude for common imports.
pub mod prelude {
    pub use crate::commands::{MoveReport, SplitReport, enfolder, mv_random, split_corpus};
    pub use crate::config::{Config, LogLevel};
    pub use crate::errors::CorpusError;
    pub use crate::fs_ops::{relocate, relocate_as};
    pub use crate::partition::{Item, Partition, list_collection, make_rng, sample, split};
}
