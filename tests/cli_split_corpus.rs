use assert_cmd::cargo;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{TempDir, tempdir};

fn corpus(n: usize) -> (TempDir, PathBuf) {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(&cfg, "<config><log_level>quiet</log_level></config>").unwrap();
    for d in ["all", "training", "testing"] {
        fs::create_dir(td.path().join(d)).unwrap();
    }
    for i in 0..n {
        let comic = td.path().join("all").join(format!("comic{i}"));
        fs::create_dir(&comic).unwrap();
        fs::write(comic.join("archive.webarchive"), format!("{i}")).unwrap();
    }
    (td, cfg)
}

fn names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn ten_entries_split_seven_three_in_working_dir() {
    let (td, cfg) = corpus(10);
    fs::write(td.path().join("all").join(".hidden"), b"x").unwrap();
    let before: BTreeSet<String> = names(&td.path().join("all"))
        .into_iter()
        .filter(|n| !n.starts_with('.'))
        .collect();

    let out = Command::new(cargo::cargo_bin!("split_corpus"))
        .env("CORPUS_TOOLS_CONFIG", &cfg)
        .current_dir(td.path())
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let training = names(&td.path().join("training"));
    let testing = names(&td.path().join("testing"));
    assert_eq!(training.len(), 7);
    assert_eq!(testing.len(), 3);
    assert!(training.is_disjoint(&testing));
    let union: BTreeSet<String> = training.union(&testing).cloned().collect();
    assert_eq!(union, before);
    assert_eq!(names(&td.path().join("all")), BTreeSet::from([".hidden".to_string()]));
}

#[test]
fn root_and_ratio_flags() {
    let (td, cfg) = corpus(8);
    let out = Command::new(cargo::cargo_bin!("split_corpus"))
        .env("CORPUS_TOOLS_CONFIG", &cfg)
        .arg("--root")
        .arg(td.path())
        .args(["--ratio", "0.25"])
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    assert_eq!(names(&td.path().join("training")).len(), 2);
    assert_eq!(names(&td.path().join("testing")).len(), 6);
}

#[test]
fn ratio_out_of_range_is_invalid_argument() {
    let (td, cfg) = corpus(3);
    let out = Command::new(cargo::cargo_bin!("split_corpus"))
        .env("CORPUS_TOOLS_CONFIG", &cfg)
        .arg("--root")
        .arg(td.path())
        .args(["--ratio", "1.0"])
        .output()
        .expect("spawn binary");
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(names(&td.path().join("all")).len(), 3);
}

#[test]
fn missing_training_dir_fails_and_moves_nothing() {
    let (td, cfg) = corpus(3);
    fs::remove_dir(td.path().join("training")).unwrap();
    let out = Command::new(cargo::cargo_bin!("split_corpus"))
        .env("CORPUS_TOOLS_CONFIG", &cfg)
        .current_dir(td.path())
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Destination directory not found"), "stderr: {stderr}");
    assert_eq!(names(&td.path().join("all")).len(), 3);
}

#[test]
fn seed_from_config_file_is_reproducible() {
    let (a, _) = corpus(10);
    let (b, _) = corpus(10);
    for root in [a.path(), b.path()] {
        let cfg = root.join("seeded.xml");
        fs::write(
            &cfg,
            "<config><log_level>quiet</log_level><seed>7</seed></config>",
        )
        .unwrap();
        let out = Command::new(cargo::cargo_bin!("split_corpus"))
            .env("CORPUS_TOOLS_CONFIG", &cfg)
            .current_dir(root)
            .output()
            .expect("spawn binary");
        assert!(out.status.success());
    }
    assert_eq!(
        names(&a.path().join("training")),
        names(&b.path().join("training"))
    );
}
