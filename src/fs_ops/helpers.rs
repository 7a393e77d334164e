//! I/O helper utilities.
//!
//! Enriches io::Error with the operation, the path and an errno-aware hint.
//!
//! Usage:
//!   fs::create_dir(dir).map_err(io_error_with_help("create dir", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Format a human-friendly message with op/path plus platform-aware hints.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str("; permission denied, check ownership and write permissions");
                }
                libc::EXDEV => {
                    msg.push_str("; cross-filesystem, rename not possible");
                }
                libc::ENOENT => {
                    msg.push_str("; path not found, verify it exists");
                }
                libc::EEXIST | libc::ENOTEMPTY => {
                    msg.push_str("; already exists, remove or rename the target first");
                }
                libc::ENOSPC => {
                    msg.push_str("; no space left on device");
                }
                libc::EROFS => {
                    msg.push_str("; read-only filesystem");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str("; file name or path too long");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str("; access denied, check permissions"),
                17 => msg.push_str("; not same device, cross-filesystem move"),
                32 => msg.push_str("; sharing violation, file is in use"),
                2 | 3 => msg.push_str("; path not found, verify it exists"),
                80 | 183 => msg.push_str("; already exists, remove or rename the target first"),
                112 => msg.push_str("; insufficient disk space"),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str("; permission denied, check ownership and write permissions");
            }
            io::ErrorKind::NotFound => {
                msg.push_str("; path not found, verify it exists");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str("; already exists, remove or rename the target first");
            }
            _ => {}
        }
    }

    msg
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}
