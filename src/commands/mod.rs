//! The three corpus commands as library functions.
//! Each is a single linear pass: list, partition, move; the first error aborts.

mod enfolder;
mod mv_random;
mod split_corpus;

pub use enfolder::{enfolder, folder_for};
pub use mv_random::mv_random;
pub use split_corpus::{SplitReport, split_corpus};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::fs_ops::relocate;
use crate::partition::Item;

/// One completed (or, in dry-run, planned) move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moved {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Moves in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    pub moves: Vec<Moved>,
    pub dry_run: bool,
}

impl MoveReport {
    fn new(dry_run: bool) -> Self {
        Self {
            moves: Vec::new(),
            dry_run,
        }
    }

    fn push(&mut self, from: PathBuf, to: PathBuf) {
        self.moves.push(Moved { from, to });
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Move each item from `src_dir` into `dest_dir`, recording every move.
fn move_items(
    items: &[Item],
    src_dir: &Path,
    dest_dir: &Path,
    report: &mut MoveReport,
) -> Result<()> {
    for item in items {
        let from = item.path_in(src_dir);
        let to = relocate(&from, dest_dir, report.dry_run)?;
        report.push(from, to);
    }
    Ok(())
}
