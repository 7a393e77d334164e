//! Cross-filesystem fallback: copy into place, then remove the source.
//!
//! - Files are copied to a hidden temp file in the destination directory,
//!   fsynced, then renamed to the final name.
//! - Directories are rebuilt in a hidden staging directory (files copied in
//!   parallel), then the staging directory is renamed to the final name.
//! - The source is removed only after the destination is complete.

use anyhow::{Result, anyhow, bail};
use rayon::prelude::*;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::errors::CorpusError;

use super::atomic::try_rename;
use super::helpers::io_error_with_help;
use super::{meta, util};

pub(super) fn copy_then_remove(src: &Path, dst: &Path, src_meta: &fs::Metadata) -> Result<()> {
    let ftype = src_meta.file_type();
    if ftype.is_symlink() {
        copy_symlink(src, dst)?;
        fs::remove_file(src).map_err(io_error_with_help("remove original symlink", src))?;
    } else if ftype.is_dir() {
        copy_tree(src, dst, src_meta)?;
        fs::remove_dir_all(src).map_err(io_error_with_help("remove source directory", src))?;
    } else if ftype.is_file() {
        copy_file(src, dst, src_meta)?;
        fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;
    } else {
        bail!(
            "Source path is neither a regular file nor a directory: {}",
            src.display()
        );
    }
    info!(src = %src.display(), dest = %dst.display(), "Copied across filesystems and removed source");
    Ok(())
}

fn parent_of(dst: &Path) -> Result<&Path> {
    dst.parent()
        .ok_or_else(|| anyhow!("destination has no parent: {}", dst.display()))
}

/// Final step shared by files and trees: refuse to clobber, then rename into place.
fn promote(tmp: &Path, dst: &Path) -> Result<()> {
    if fs::symlink_metadata(dst).is_ok() {
        return Err(CorpusError::DestinationExists(dst.to_path_buf()).into());
    }
    try_rename(tmp, dst).map_err(io_error_with_help("rename temporary copy into place", dst))
}

fn copy_file(src: &Path, dst: &Path, src_meta: &fs::Metadata) -> Result<()> {
    let tmp = util::unique_temp_path(parent_of(dst)?);

    let result = (|| -> Result<()> {
        fs::copy(src, &tmp).map_err(io_error_with_help("copy to temporary file", &tmp))?;
        OpenOptions::new()
            .write(true)
            .open(&tmp)
            .and_then(|f| f.sync_all())
            .map_err(io_error_with_help("fsync temporary file", &tmp))?;
        promote(&tmp, dst)?;
        meta::carry_over(src_meta, dst);
        Ok(())
    })();

    if result.is_err() {
        // Best-effort cleanup of the temp file on failure.
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn copy_tree(src: &Path, dst: &Path, src_meta: &fs::Metadata) -> Result<()> {
    let staging = util::unique_temp_path(parent_of(dst)?);
    fs::create_dir(&staging).map_err(io_error_with_help("create staging directory", &staging))?;

    let result = (|| -> Result<()> {
        let mut dirs: Vec<(PathBuf, fs::Metadata)> = Vec::new();
        let mut files: Vec<(PathBuf, PathBuf, fs::Metadata)> = Vec::new();

        for entry in WalkDir::new(src).min_depth(1) {
            let entry = entry?;
            let rel = entry.path().strip_prefix(src)?;
            let target = staging.join(rel);
            let emeta = entry.metadata()?;
            let ftype = entry.file_type();
            if ftype.is_dir() {
                fs::create_dir_all(&target)
                    .map_err(io_error_with_help("create directory", &target))?;
                dirs.push((target, emeta));
            } else if ftype.is_symlink() {
                copy_symlink(entry.path(), &target)?;
            } else if ftype.is_file() {
                files.push((entry.into_path(), target, emeta));
            } else {
                bail!(
                    "Refusing to copy special file inside directory: {}",
                    entry.path().display()
                );
            }
        }

        debug!(src = %src.display(), files = files.len(), dirs = dirs.len(), "copying tree");

        files.par_iter().try_for_each(|(from, to, fmeta)| -> Result<()> {
            fs::copy(from, to).map_err(io_error_with_help("copy file to destination", to))?;
            meta::carry_over(fmeta, to);
            Ok(())
        })?;

        // Deepest first so restoring a read-only mode never blocks a later child.
        for (dir, dmeta) in dirs.iter().rev() {
            meta::carry_over(dmeta, dir);
        }

        promote(&staging, dst)?;
        meta::carry_over(src_meta, dst);
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_dir_all(&staging);
    }
    result
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let target = fs::read_link(src).map_err(io_error_with_help("read symlink", src))?;
    std::os::unix::fs::symlink(&target, dst).map_err(io_error_with_help("create symlink", dst))?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, _dst: &Path) -> Result<()> {
    bail!(
        "Copying symlinks across filesystems is not supported on this platform: {}",
        src.display()
    )
}
