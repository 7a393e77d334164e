use anyhow::Result;
use rand::Rng;
use tracing::info;

use crate::config::{Config, ensure_destination_dir, ensure_distinct_dirs, ensure_source_dir};
use crate::partition::{list_collection, split};

use super::{MoveReport, move_items};

/// Moves made by one split, per destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub training: MoveReport,
    pub testing: MoveReport,
}

/// Shuffle `<root>/all` and move the first `train_ratio` share into `training`, the rest into `testing`.
pub fn split_corpus<R: Rng + ?Sized>(cfg: &Config, rng: &mut R) -> Result<SplitReport> {
    let all = cfg.all_dir();
    let training = cfg.training_dir();
    let testing = cfg.testing_dir();

    ensure_source_dir(&all)?;
    ensure_destination_dir(&training)?;
    ensure_destination_dir(&testing)?;
    ensure_distinct_dirs(&training, &testing)?;

    let items = list_collection(&all)?;
    let total = items.len();
    let partition = split(items, cfg.train_ratio, rng)?;
    info!(
        total,
        training = partition.first.len(),
        testing = partition.second.len(),
        ratio = cfg.train_ratio,
        "split corpus"
    );

    let mut report = SplitReport {
        training: MoveReport::new(cfg.dry_run),
        testing: MoveReport::new(cfg.dry_run),
    };
    move_items(&partition.first, &all, &training, &mut report.training)?;
    move_items(&partition.second, &all, &testing, &mut report.testing)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CorpusError;
    use crate::partition::make_rng;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn count(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    fn corpus(n: usize) -> (tempfile::TempDir, Config) {
        let td = tempdir().unwrap();
        let cfg = Config::with_root(td.path());
        for d in [cfg.all_dir(), cfg.training_dir(), cfg.testing_dir()] {
            fs::create_dir(d).unwrap();
        }
        for i in 0..n {
            let comic = cfg.all_dir().join(format!("comic{i}"));
            fs::create_dir(&comic).unwrap();
            fs::write(comic.join("archive.webarchive"), b"x").unwrap();
        }
        (td, cfg)
    }

    #[test]
    fn ten_split_seven_three() {
        let (_td, cfg) = corpus(10);
        let report = split_corpus(&cfg, &mut make_rng(Some(3))).unwrap();
        assert_eq!(report.training.len(), 7);
        assert_eq!(report.testing.len(), 3);
        assert_eq!(count(&cfg.all_dir()), 0);
        assert_eq!(count(&cfg.training_dir()), 7);
        assert_eq!(count(&cfg.testing_dir()), 3);
    }

    #[test]
    fn custom_ratio_is_honoured() {
        let (_td, mut cfg) = corpus(9);
        cfg.train_ratio = 0.5;
        split_corpus(&cfg, &mut make_rng(Some(3))).unwrap();
        assert_eq!(count(&cfg.training_dir()), 4);
        assert_eq!(count(&cfg.testing_dir()), 5);
    }

    #[test]
    fn missing_testing_dir_fails_before_moving() {
        let (_td, cfg) = corpus(4);
        fs::remove_dir(cfg.testing_dir()).unwrap();
        let err = split_corpus(&cfg, &mut make_rng(None)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CorpusError>(),
            Some(CorpusError::DestinationNotFound(_))
        ));
        assert_eq!(count(&cfg.all_dir()), 4);
    }

    #[test]
    fn dry_run_reports_but_keeps_all() {
        let (_td, mut cfg) = corpus(5);
        cfg.dry_run = true;
        let report = split_corpus(&cfg, &mut make_rng(Some(1))).unwrap();
        assert_eq!(report.training.len() + report.testing.len(), 5);
        assert_eq!(count(&cfg.all_dir()), 5);
        assert_eq!(count(&cfg.training_dir()), 0);
    }
}
