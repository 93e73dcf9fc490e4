use std::fs;
use std::path::Path;

use clap::Parser;
use diffcov::core::cli::Args;
use diffcov::core::cmds::load_campaign;
use diffcov::types::AppError;
use diffcov::{CollectionReducer, ValueReducer, read_campaign_dir, relcov_table, relscore_all};
use pretty_assertions::assert_eq;
use tempfile::{TempDir, tempdir};

fn write_trial(campaign: &Path, approach: &str, trial: &str, lines: &str) {
    let dir = campaign.join(approach);
    if !dir.exists() {
        fs::create_dir(&dir).expect("create approach dir");
    }
    fs::write(dir.join(trial), lines).expect("write trial file");
}

/// The literature example campaign, laid out as afl-showmap files.
fn literature_campaign() -> TempDir {
    let dir = tempdir().expect("tempdir");
    let root = dir.path();
    write_trial(root, "fuzzer_a", "trial1.showmap", "1:1\n2:1\n3:1\n");
    write_trial(root, "fuzzer_a", "trial2.showmap", "1:7\n");
    write_trial(root, "fuzzer_b", "trial1.showmap", "1:1\n3:1\n");
    write_trial(root, "fuzzer_b", "trial2.showmap", "1:2\n3:4\n");
    write_trial(root, "fuzzer_c", "trial1.showmap", "1:1\n2:1\n3:1\n");
    write_trial(root, "fuzzer_c", "trial2.showmap", "1:3\n2:1\n3:9\n");
    dir
}

#[test]
fn directory_campaign_reproduces_literature_relscores() {
    let dir = literature_campaign();
    let campaign = read_campaign_dir(dir.path()).expect("readable campaign");

    let outcome = relscore_all(&campaign);
    assert_eq!(outcome.scores["fuzzer_c"], 1.0);
    assert_eq!(outcome.scores["fuzzer_a"], 0.5);
    assert_eq!(outcome.scores["fuzzer_b"], 0.0);
}

#[test]
fn directory_campaign_yields_full_relcov_table() {
    let dir = literature_campaign();
    let campaign = read_campaign_dir(dir.path()).expect("readable campaign");

    let table = relcov_table(&campaign, ValueReducer::Median, CollectionReducer::Union)
        .expect("table computes");
    assert_eq!(table.columns.len(), 3);
    // fuzzer_c reaches everything either fuzzer reaches.
    assert_eq!(table.get("fuzzer_c", "fuzzer_a"), Some(1.0));
    assert_eq!(table.get("fuzzer_c", "fuzzer_b"), Some(1.0));
    // fuzzer_b's trials each cover two of fuzzer_c's three edges.
    assert_eq!(table.get("fuzzer_b", "fuzzer_c"), Some(2.0 / 3.0));
}

#[test]
fn exclude_filter_applies_before_relscore() {
    let dir = literature_campaign();

    let args = Args::parse_from(["diffcov", "-x", "fuzzer_c", "relscore", "unused"]);
    let filtered = load_campaign(dir.path(), &args).expect("filtered campaign");
    assert_eq!(filtered.approaches().len(), 2);

    // Without fuzzer_c in the pool, edge 2 is exclusive to fuzzer_a and
    // fuzzer_b misses it; the scores shift accordingly.
    let outcome = relscore_all(&filtered);
    assert_eq!(outcome.scores["fuzzer_a"], 0.5);
    assert_eq!(outcome.scores["fuzzer_b"], 0.0);
    assert!(!outcome.scores.contains_key("fuzzer_c"));

    let full = read_campaign_dir(dir.path()).expect("readable campaign");
    let full_outcome = relscore_all(&full);
    // fuzzer_c's own score exists only in the unfiltered campaign.
    assert_eq!(full_outcome.scores["fuzzer_c"], 1.0);
}

#[test]
fn include_filter_narrows_the_table() {
    let dir = literature_campaign();
    let args = Args::parse_from(["diffcov", "-i", "fuzzer_[ab]", "relcov", "unused"]);
    let campaign = load_campaign(dir.path(), &args).expect("filtered campaign");

    let table = relcov_table(&campaign, ValueReducer::Median, CollectionReducer::Union)
        .expect("table computes");
    assert_eq!(table.columns, vec!["fuzzer_a", "fuzzer_b"]);
    assert!(table.get("fuzzer_c", "fuzzer_c").is_none());
}

#[test]
fn malformed_trial_file_fails_the_read() {
    let dir = tempdir().expect("tempdir");
    write_trial(dir.path(), "fuzzer_a", "trial1", "1:1\nnot-a-record\n");

    match read_campaign_dir(dir.path()) {
        Err(AppError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn campaign_with_stray_file_fails_the_read() {
    let dir = tempdir().expect("tempdir");
    write_trial(dir.path(), "fuzzer_a", "trial1", "1:1\n");
    fs::write(dir.path().join("notes.txt"), "scratch\n").expect("write stray file");

    assert!(matches!(
        read_campaign_dir(dir.path()),
        Err(AppError::UnexpectedEntry(_))
    ));
}

#[test]
fn trial_ids_come_from_file_stems() {
    let dir = tempdir().expect("tempdir");
    write_trial(dir.path(), "fuzzer_a", "run-01.showmap", "1:1\n");
    write_trial(dir.path(), "fuzzer_a", "run-02.showmap", "2:1\n");

    let campaign = read_campaign_dir(dir.path()).expect("readable campaign");
    let trials = campaign.get("fuzzer_a").expect("approach exists").trials();
    let ids: Vec<&String> = trials.keys().collect();
    assert_eq!(ids, vec!["run-01", "run-02"]);
}
