//! Cooperative stop flag.
//!
//! The Ctrl-C handler sets it; `relocate_as` and `create_new_dir` read it
//! before touching the filesystem, so a run stops between two moves and
//! never in the middle of one.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::CorpusError;

static STOP: AtomicBool = AtomicBool::new(false);

/// Ask running commands to stop before their next move. Signal-safe.
pub fn request() {
    STOP.store(true, Ordering::Relaxed);
}

pub fn is_requested() -> bool {
    STOP.load(Ordering::Relaxed)
}

/// `Err(Interrupted)` once a stop was requested.
pub fn check() -> Result<(), CorpusError> {
    match is_requested() {
        true => Err(CorpusError::Interrupted),
        false => Ok(()),
    }
}

/// Clear the flag so one test process can exercise both states.
#[cfg(any(test, feature = "test-utils"))]
pub fn reset() {
    STOP.store(false, Ordering::Relaxed);
}
