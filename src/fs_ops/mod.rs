//! Filesystem operations: moving a single item into place.

mod atomic;
mod copy;
mod helpers;
mod meta;
mod relocate;
mod util;

pub use helpers::io_error_with_help;
pub use relocate::{create_new_dir, relocate, relocate_as};
