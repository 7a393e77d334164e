use anyhow::Result;
use rand::Rng;
use std::path::Path;
use tracing::info;

use crate::config::{Config, ensure_destination_dir, ensure_distinct_dirs, ensure_source_dir};
use crate::partition::{list_collection, sample};

use super::{MoveReport, move_items};

/// Move `count` randomly chosen non-hidden entries of `from` into `to`.
pub fn mv_random<R: Rng + ?Sized>(
    cfg: &Config,
    from: &Path,
    to: &Path,
    count: usize,
    rng: &mut R,
) -> Result<MoveReport> {
    ensure_source_dir(from)?;
    ensure_destination_dir(to)?;
    ensure_distinct_dirs(from, to)?;

    let items = list_collection(from)?;
    let available = items.len();
    let picked = sample(items, count, rng)?;
    info!(
        from = %from.display(),
        to = %to.display(),
        available,
        count,
        "sampled entries to move"
    );

    let mut report = MoveReport::new(cfg.dry_run);
    move_items(&picked.first, from, to, &mut report)?;
    Ok(report)
}
