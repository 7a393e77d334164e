//! Config validation and directory checks shared by the commands.

use anyhow::{Result, bail};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::CorpusError;

use super::types::Config;

impl Config {
    /// Check value ranges that the XML/CLI parsers cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(self.train_ratio.is_finite() && self.train_ratio > 0.0 && self.train_ratio < 1.0) {
            return Err(CorpusError::InvalidRatio(self.train_ratio).into());
        }
        let name = Path::new(&self.archive_name);
        if self.archive_name.is_empty()
            || name.components().count() != 1
            || name.file_name().is_none()
        {
            bail!(
                "archive_name must be a plain file name, got '{}'",
                self.archive_name
            );
        }
        debug!(config = ?self, "config validated");
        Ok(())
    }
}

fn ensure_dir(path: &Path, missing: CorpusError) -> Result<(), CorpusError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(CorpusError::NotADirectory(path.to_path_buf())),
        Err(_) => Err(missing),
    }
}

/// Source directory must exist and be a directory.
pub fn ensure_source_dir(path: &Path) -> Result<(), CorpusError> {
    ensure_dir(path, CorpusError::SourceNotFound(path.to_path_buf()))
}

/// Destination directory must exist and be a directory; it is never created implicitly.
pub fn ensure_destination_dir(path: &Path) -> Result<(), CorpusError> {
    ensure_dir(path, CorpusError::DestinationNotFound(path.to_path_buf()))
}

/// Refuse two directories that resolve to the same place (symlinks included).
pub fn ensure_distinct_dirs(a: &Path, b: &Path) -> Result<()> {
    let a_real = dunce::canonicalize(a).unwrap_or_else(|_| a.to_path_buf());
    let b_real = dunce::canonicalize(b).unwrap_or_else(|_| b.to_path_buf());
    if a_real == b_real {
        bail!(
            "'{}' and '{}' resolve to the same directory: '{}'",
            a.display(),
            b.display(),
            a_real.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ratio_bounds_are_exclusive() {
        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let cfg = Config {
                train_ratio: bad,
                ..Config::default()
            };
            let err = cfg.validate().unwrap_err();
            assert!(matches!(
                err.downcast_ref::<CorpusError>(),
                Some(CorpusError::InvalidRatio(_))
            ));
        }
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn archive_name_with_separator_rejected() {
        let cfg = Config {
            archive_name: "nested/archive.webarchive".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_dirs_map_to_role_specific_errors() {
        let td = tempdir().unwrap();
        let missing = td.path().join("nope");
        assert!(matches!(
            ensure_source_dir(&missing),
            Err(CorpusError::SourceNotFound(_))
        ));
        assert!(matches!(
            ensure_destination_dir(&missing),
            Err(CorpusError::DestinationNotFound(_))
        ));
        let file = td.path().join("f.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            ensure_source_dir(&file),
            Err(CorpusError::NotADirectory(_))
        ));
    }

    #[test]
    fn same_dir_via_different_spelling_is_refused() {
        let td = tempdir().unwrap();
        let a = td.path().join("a");
        fs::create_dir_all(&a).unwrap();
        let b = a.join(".");
        assert!(ensure_distinct_dirs(&a, &b).is_err());
        let c = td.path().join("c");
        fs::create_dir_all(&c).unwrap();
        assert!(ensure_distinct_dirs(&a, &c).is_ok());
    }
}
