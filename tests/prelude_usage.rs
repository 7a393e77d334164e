use corpus_tools::prelude::*;

#[test]
fn prelude_exports_expected_items() {
    let cfg = Config::default();
    let _ = LogLevel::Debug;
    let _err = CorpusError::Interrupted;
    let _item = Item::new("comic.webarchive");
    // Signatures are visible through the prelude.
    let _relocate: fn(&std::path::Path, &std::path::Path, bool) -> anyhow::Result<std::path::PathBuf> =
        relocate;
    let _enfolder: fn(&Config, &[std::path::PathBuf]) -> anyhow::Result<MoveReport> = enfolder;
    let p: Partition = split(Vec::new(), 0.7, &mut make_rng(Some(1))).unwrap();
    assert!(p.is_empty());
    assert_eq!(cfg.archive_name, "archive.webarchive");
}
