//! Single-item relocation.
//! Attempts a rename; across filesystems falls back to copy + remove.
//! Never overwrites an existing destination.

use anyhow::{Result, anyhow};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::errors::CorpusError;
use crate::shutdown;

use super::atomic::try_rename;
use super::copy::copy_then_remove;
use super::helpers::io_error_with_help;
use super::util::is_cross_device;

/// Move `src` into `dest_dir`, keeping its file name. Returns the new path.
pub fn relocate(src: &Path, dest_dir: &Path, dry_run: bool) -> Result<PathBuf> {
    let name = src
        .file_name()
        .ok_or_else(|| anyhow!("Source path has no file name: {}", src.display()))?;
    relocate_as(src, &dest_dir.join(name), dry_run)
}

/// Move `src` to exactly `target`. Returns `target`.
///
/// Errors:
/// - `SourceNotFound` when `src` is gone.
/// - `DestinationExists` when anything already sits at `target`.
/// - `DestinationNotFound` when the parent of `target` is missing.
pub fn relocate_as(src: &Path, target: &Path, dry_run: bool) -> Result<PathBuf> {
    shutdown::check()?;

    // symlink_metadata: a symlink item is moved as the link itself.
    let src_meta = fs::symlink_metadata(src).map_err(|e| -> anyhow::Error {
        if e.kind() == io::ErrorKind::NotFound {
            CorpusError::SourceNotFound(src.to_path_buf()).into()
        } else {
            io_error_with_help("stat source", src)(e)
        }
    })?;

    if fs::symlink_metadata(target).is_ok() {
        return Err(CorpusError::DestinationExists(target.to_path_buf()).into());
    }

    if dry_run {
        info!(src = %src.display(), dest = %target.display(), "dry-run: would move");
        return Ok(target.to_path_buf());
    }

    match try_rename(src, target) {
        Ok(()) => {
            info!(src = %src.display(), dest = %target.display(), "Renamed");
            Ok(target.to_path_buf())
        }
        Err(e) if is_cross_device(&e) => {
            warn!(error = %e, src = %src.display(), "Rename crosses filesystems, using copy + remove");
            copy_then_remove(src, target, &src_meta)?;
            Ok(target.to_path_buf())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // Either side may have vanished; report the one that did.
            if fs::symlink_metadata(src).is_err() {
                Err(CorpusError::SourceNotFound(src.to_path_buf()).into())
            } else {
                let parent = target.parent().unwrap_or(target);
                Err(CorpusError::DestinationNotFound(parent.to_path_buf()).into())
            }
        }
        Err(e) => Err(io_error_with_help("rename", src)(e)),
    }
}

/// Create exactly one new directory. An existing path is `DestinationExists`.
pub fn create_new_dir(dir: &Path, dry_run: bool) -> Result<()> {
    shutdown::check()?;

    if dry_run {
        if fs::symlink_metadata(dir).is_ok() {
            return Err(CorpusError::DestinationExists(dir.to_path_buf()).into());
        }
        info!(path = %dir.display(), "dry-run: would create directory");
        return Ok(());
    }

    match fs::create_dir(dir) {
        Ok(()) => {
            info!(path = %dir.display(), "Created directory");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            Err(CorpusError::DestinationExists(dir.to_path_buf()).into())
        }
        Err(e) => Err(io_error_with_help("create directory", dir)(e)),
    }
}
