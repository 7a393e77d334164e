use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::CorpusError;
use crate::fs_ops::{create_new_dir, io_error_with_help, relocate_as};

use super::MoveReport;

/// Folder a file is moved into: the file's path with its extension stripped.
pub fn folder_for(file: &Path) -> Result<PathBuf> {
    if file.extension().is_none() {
        bail!(
            "'{}' has no extension; its folder would have the same name",
            file.display()
        );
    }
    Ok(file.with_extension(""))
}

/// For each file: create `<stem>/` next to it and move the file in as `archive_name`.
///
/// Files are processed in order; the first failure stops the run and earlier
/// files stay moved. An existing folder is an error, never merged into. Two
/// files mapping to the same folder fail on the second one, in dry-run too.
pub fn enfolder(cfg: &Config, files: &[PathBuf]) -> Result<MoveReport> {
    let mut report = MoveReport::new(cfg.dry_run);
    let mut planned: HashSet<PathBuf> = HashSet::new();

    for file in files {
        // Checked up front so a missing file does not leave an empty folder behind.
        fs::symlink_metadata(file).map_err(|e| -> anyhow::Error {
            if e.kind() == io::ErrorKind::NotFound {
                CorpusError::SourceNotFound(file.clone()).into()
            } else {
                io_error_with_help("stat file", file)(e)
            }
        })?;

        let folder = folder_for(file)?;
        if !planned.insert(folder.clone()) {
            return Err(CorpusError::DestinationExists(folder).into());
        }
        create_new_dir(&folder, cfg.dry_run)?;
        let target = folder.join(&cfg.archive_name);
        debug!(file = %file.display(), target = %target.display(), "enfolder");

        let dest = match relocate_as(file, &target, cfg.dry_run) {
            Ok(dest) => dest,
            Err(e) => {
                if !cfg.dry_run {
                    remove_empty_folder(&folder);
                }
                return Err(e)
                    .with_context(|| format!("move '{}' into its folder", file.display()));
            }
        };
        report.push(file.clone(), dest);
    }

    Ok(report)
}

/// Undo `create_new_dir` after a failed move so the file can be enfoldered again.
/// Only an empty folder is removed.
fn remove_empty_folder(folder: &Path) {
    match fs::remove_dir(folder) {
        Ok(()) => debug!(path = %folder.display(), "removed folder after failed move"),
        Err(e) => {
            warn!(path = %folder.display(), error = %e, "could not remove folder after failed move")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn cfg() -> Config {
        Config::default()
    }

    #[test]
    fn folder_strips_only_last_extension() {
        assert_eq!(
            folder_for(Path::new("dir/report.webarchive")).unwrap(),
            PathBuf::from("dir/report")
        );
        assert_eq!(
            folder_for(Path::new("a.b.webarchive")).unwrap(),
            PathBuf::from("a.b")
        );
        assert!(folder_for(Path::new("README")).is_err());
    }

    #[test]
    fn enfolder_creates_folder_with_archive() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("report.webarchive");
        file.write_str("<html/>").unwrap();

        let report = enfolder(&cfg(), &[file.path().to_path_buf()]).unwrap();

        let archive = temp.path().join("report").join("archive.webarchive");
        assert!(!file.path().exists());
        assert_eq!(fs::read_to_string(&archive).unwrap(), "<html/>");
        assert_eq!(report.moves.len(), 1);
        assert_eq!(report.moves[0].to, archive);
    }

    #[test]
    fn existing_folder_is_an_error_and_file_stays() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("report.webarchive");
        file.write_str("x").unwrap();
        temp.child("report").create_dir_all().unwrap();

        let err = enfolder(&cfg(), &[file.path().to_path_buf()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CorpusError>(),
            Some(CorpusError::DestinationExists(_))
        ));
        assert!(file.path().exists());
        assert!(!temp.path().join("report/archive.webarchive").exists());
    }

    #[test]
    fn missing_file_leaves_no_folder() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.path().join("ghost.webarchive");
        let err = enfolder(&cfg(), &[missing]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CorpusError>(),
            Some(CorpusError::SourceNotFound(_))
        ));
        assert!(!temp.path().join("ghost").exists());
    }

    #[test]
    fn stops_at_first_failure() {
        let temp = assert_fs::TempDir::new().unwrap();
        let a = temp.child("a.webarchive");
        a.write_str("a").unwrap();
        let c = temp.child("c.webarchive");
        c.write_str("c").unwrap();
        let files = vec![
            a.path().to_path_buf(),
            temp.path().join("b.webarchive"),
            c.path().to_path_buf(),
        ];

        assert!(enfolder(&cfg(), &files).is_err());
        assert!(temp.path().join("a/archive.webarchive").exists());
        assert!(c.path().exists());
        assert!(!temp.path().join("c").exists());
    }

    #[test]
    fn custom_archive_name_and_dry_run() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("strip.webarchive");
        file.write_str("x").unwrap();
        let cfg = Config {
            archive_name: "page.webarchive".into(),
            dry_run: true,
            ..Config::default()
        };

        let report = enfolder(&cfg, &[file.path().to_path_buf()]).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.moves[0].to, temp.path().join("strip/page.webarchive"));
        assert!(file.path().exists());
        assert!(!temp.path().join("strip").exists());
    }

    #[test]
    fn shared_stem_fails_the_same_way_in_dry_run() {
        for dry_run in [true, false] {
            let temp = assert_fs::TempDir::new().unwrap();
            let a = temp.child("a.webarchive");
            a.write_str("one").unwrap();
            let b = temp.child("a.html");
            b.write_str("two").unwrap();
            let cfg = Config {
                dry_run,
                ..Config::default()
            };

            let err = enfolder(&cfg, &[a.path().to_path_buf(), b.path().to_path_buf()])
                .unwrap_err();
            match err.downcast_ref::<CorpusError>() {
                Some(CorpusError::DestinationExists(p)) => assert_eq!(p, &temp.path().join("a")),
                other => panic!("dry_run={dry_run}: unexpected error {other:?}"),
            }
            assert!(b.path().exists());
        }
    }

    #[test]
    fn failed_move_removes_the_new_folder() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("report.webarchive");
        file.write_str("x").unwrap();
        // Parent of the target never exists, so the rename fails after the folder is made.
        let cfg = Config {
            archive_name: "missing/archive.webarchive".into(),
            ..Config::default()
        };

        let err = enfolder(&cfg, &[file.path().to_path_buf()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CorpusError>(),
            Some(CorpusError::DestinationNotFound(_))
        ));
        assert!(file.path().exists());
        assert!(!temp.path().join("report").exists());

        // A plain re-run now succeeds.
        enfolder(&Config::default(), &[file.path().to_path_buf()]).unwrap();
        assert!(temp.path().join("report/archive.webarchive").exists());
    }
}
