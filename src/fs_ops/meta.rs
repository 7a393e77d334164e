//! Metadata carry-over for the copy fallback.
//! Copies permissions and timestamps so a copied item looks like a renamed one.

use filetime::{FileTime, set_file_times};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Best-effort: failures are logged, never returned.
pub(super) fn carry_over(src_meta: &fs::Metadata, dest: &Path) {
    let at = FileTime::from_last_access_time(src_meta);
    let mt = FileTime::from_last_modification_time(src_meta);
    if let Err(e) = set_file_times(dest, at, mt) {
        debug!(dest = %dest.display(), error = %e, "could not copy timestamps");
    }

    if let Err(e) = fs::set_permissions(dest, src_meta.permissions()) {
        debug!(dest = %dest.display(), error = %e, "could not copy permissions");
    }
}
