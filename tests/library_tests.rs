//! Direct library API tests.
//!
//! These tests call the library functions directly without going through the CLI,
//! enabling more precise assertions about behavior and return values.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use tempfile::tempdir;
use trunit::{
    build_consensus, canonicalize,
    builder::UnitTable,
    cli::OutputFormat,
    config::Processes,
    repeat::{ModelScores, RepeatList, RepeatRecord},
    run::{annotate_dir, export_table},
    store::{load_repeat_list, save_repeat_list},
    table::DEFAULT_MODEL,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn scored_record(begin: u64, msa: &[&str]) -> RepeatRecord {
    let mut scores = BTreeMap::new();
    scores.insert(
        DEFAULT_MODEL.to_string(),
        ModelScores {
            score: 3.0,
            pvalue: 0.01,
            divergence: 0.1,
        },
    );
    RepeatRecord {
        begin,
        l_effective: msa.first().map_or(0, |unit| unit.len() as u64),
        repeat_region_length: 20,
        msa: msa.iter().map(ToString::to_string).collect(),
        scores,
        consensus_unit: None,
        canonical_unit: None,
    }
}

#[test]
fn consensus_of_identical_units_is_the_unit() {
    let consensus = build_consensus(["GATTACA", "GATTACA", "GATTACA"]).unwrap();
    assert_eq!(consensus, "GATTACA");
}

#[test]
fn consensus_tie_goes_to_the_first_seen_base() {
    // Column 4 of {T, A, -} has one gap (below the drop threshold) and a
    // T/A tie, which resolves to T because it appears in an earlier unit.
    let consensus = build_consensus(["ACGT", "ACGA", "ACG-"]).unwrap();
    assert_eq!(consensus, "ACGT");
}

#[test]
fn consensus_drops_gap_majority_columns() {
    let consensus = build_consensus(["A-", "--", "A-"]).unwrap();
    assert_eq!(consensus, "A");
}

#[test]
fn canonical_unit_of_documented_example() {
    // The full orbit of TTTA has eight candidates:
    // {TTTA, TAAA, TTAT, AAAT, TATT, AATA, ATTT, ATAA}; AAAT is smallest.
    let orbit = [
        "TTTA", "TAAA", "TTAT", "AAAT", "TATT", "AATA", "ATTT", "ATAA",
    ];
    let minimum = orbit.iter().min().unwrap();
    assert_eq!(canonicalize("TTTA").unwrap(), *minimum);
    assert_eq!(canonicalize("TTTA").unwrap(), "AAAT");
}

#[test]
fn consensus_then_canonical_is_the_record_contract() {
    let mut record = scored_record(1, &["TTTA", "TTTA", "TTTA"]);
    record.annotate().unwrap();

    let consensus = record.consensus_unit.unwrap();
    let canonical = record.canonical_unit.unwrap();
    assert_eq!(consensus, "TTTA");
    assert_eq!(canonical, canonicalize(&consensus).unwrap());
}

#[test]
fn annotate_dir_end_to_end() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    save_repeat_list(
        input.path(),
        "chr1",
        &RepeatList {
            repeats: vec![scored_record(100, &["TTTA", "TTTA"])],
        },
    )
    .unwrap();
    save_repeat_list(
        input.path(),
        "chr2",
        &RepeatList {
            repeats: vec![scored_record(7, &["ACGT", "ACGA", "ACG-"])],
        },
    )
    .unwrap();

    let summary = annotate_dir(input.path(), output.path(), Processes::Fixed(2)).unwrap();
    assert_eq!(summary.annotated, 2);
    assert_eq!(summary.failed, 0);

    let chr2 = load_repeat_list(&output.path().join("chr2.json")).unwrap();
    assert_eq!(chr2.repeats[0].consensus_unit.as_deref(), Some("ACGT"));
    assert_eq!(chr2.repeats[0].canonical_unit.as_deref(), Some("ACGT"));
}

#[test]
fn annotate_dir_resume_skips_finished_sequences() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    save_repeat_list(
        input.path(),
        "chr1",
        &RepeatList {
            repeats: vec![scored_record(1, &["ACGT"])],
        },
    )
    .unwrap();

    annotate_dir(input.path(), output.path(), Processes::Fixed(1)).unwrap();
    let rerun = annotate_dir(input.path(), output.path(), Processes::Fixed(1)).unwrap();
    assert_eq!(rerun.annotated, 0);
    assert_eq!(rerun.skipped, 1);
}

#[test]
fn export_rows_from_fixture_directory() {
    let rows = UnitTable::new().rows(fixture_path("repeats")).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].seq, "chr1");
    assert_eq!(rows[0].begin, 100);
    assert_eq!(rows[0].consensus_unit, "TTTA");
    assert_eq!(rows[0].canonical_unit, "AAAT");
    assert!((rows[0].n_effective - 3.0).abs() < f64::EPSILON);

    // Second record: gap and tie handling through the whole pipeline.
    assert_eq!(rows[1].begin, 480);
    assert_eq!(rows[1].consensus_unit, "ACGT");
}

#[test]
fn export_table_writes_tsv_with_header() {
    let mut out = Vec::new();
    let written = export_table(
        fixture_path("repeats"),
        &mut out,
        OutputFormat::Tsv,
        DEFAULT_MODEL,
    )
    .unwrap();
    assert_eq!(written, 2);

    let text = String::from_utf8(out).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with("seq\tbegin\t"));
    assert!(header.ends_with("\tmsa"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn builder_write_to_json() {
    let mut out = Vec::new();
    let written = UnitTable::new()
        .format(OutputFormat::Json)
        .write_to(fixture_path("repeats"), &mut out)
        .unwrap();
    assert_eq!(written, 2);

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    assert_eq!(parsed[0]["canonical_unit"], "AAAT");
}

#[test]
fn export_with_unknown_model_names_the_record() {
    let err = UnitTable::new()
        .model("phylo_gap05")
        .rows(fixture_path("repeats"))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("phylo_gap05"));
    assert!(message.contains("chr1"));
}
