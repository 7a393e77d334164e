//! Collection listing and random partitioning.
//!
//! A collection is the sorted list of non-hidden names in a directory. Sorting
//! makes the result of a seeded shuffle independent of `read_dir` order.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::config::ensure_source_dir;
use crate::errors::CorpusError;
use crate::fs_ops::io_error_with_help;

/// An opaque directory entry name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item(OsString);

impl Item {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &OsStr {
        &self.0
    }

    /// Full path of this item inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.0)
    }
}

/// Two disjoint subsequences covering a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub first: Vec<Item>,
    pub second: Vec<Item>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Names starting with a dot are hidden.
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// List the non-hidden entries of `dir`, sorted by name.
pub fn list_collection(dir: &Path) -> Result<Vec<Item>> {
    ensure_source_dir(dir)?;

    let mut items = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error_with_help("read directory", dir))? {
        let entry = entry.map_err(io_error_with_help("read directory entry", dir))?;
        let name = entry.file_name();
        if is_hidden(&name) {
            trace!(dir = %dir.display(), name = ?name, "skipping hidden entry");
            continue;
        }
        items.push(Item(name));
    }
    items.sort();

    debug!(dir = %dir.display(), count = items.len(), "listed collection");
    Ok(items)
}

/// Index where the first partition ends: `floor(len * ratio)`.
pub fn divider(len: usize, ratio: f64) -> usize {
    ((len as f64 * ratio).floor() as usize).min(len)
}

/// Shuffle `items` uniformly and cut at `floor(len * ratio)`.
pub fn split<R: Rng + ?Sized>(
    mut items: Vec<Item>,
    ratio: f64,
    rng: &mut R,
) -> Result<Partition, CorpusError> {
    if !(ratio.is_finite() && ratio > 0.0 && ratio < 1.0) {
        return Err(CorpusError::InvalidRatio(ratio));
    }

    items.shuffle(rng);
    let cut = divider(items.len(), ratio);
    let second = items.split_off(cut);
    Ok(Partition {
        first: items,
        second,
    })
}

/// Draw exactly `n` distinct items without replacement into `first`; the rest go to `second`.
///
/// `first` is in draw order, `second` keeps the input order.
pub fn sample<R: Rng + ?Sized>(
    items: Vec<Item>,
    n: usize,
    rng: &mut R,
) -> Result<Partition, CorpusError> {
    if n > items.len() {
        return Err(CorpusError::SampleTooLarge {
            requested: n,
            available: items.len(),
        });
    }

    let picked = rand::seq::index::sample(rng, items.len(), n);
    let mut slots: Vec<Option<Item>> = items.into_iter().map(Some).collect();
    let first: Vec<Item> = picked.iter().filter_map(|i| slots[i].take()).collect();
    let second: Vec<Item> = slots.into_iter().flatten().collect();
    Ok(Partition { first, second })
}

/// RNG for shuffling and sampling: seeded when `seed` is given, else from OS entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}
