use super::*;
use crate::model::record::BacteriaCode;
use std::fs;
use tempfile::tempdir;

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write file");
}

#[test]
fn mixed_rows_keep_only_valid() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("data.txt");
    write_file(&path, "25 1.5 1\n70 2.0 2\n30 -1 3\n");

    let outcome = load_dataset(&path).expect("load");
    assert_eq!(outcome.valid_row_count(), 1);
    assert_eq!(outcome.invalid_row_count(), 2);
    let record = outcome.dataset.records()[0];
    assert_eq!(record.temperature(), 25.0);
    assert_eq!(record.growth_rate(), 1.5);
    assert_eq!(record.bacteria(), BacteriaCode::SalmonellaEnterica);

    assert_eq!(outcome.issues[0].line, 2);
    assert_eq!(outcome.issues[0].kind, "temperature");
    assert!(outcome.issues[0].reason.contains("Found: 70"));
    assert_eq!(outcome.issues[1].line, 3);
    assert_eq!(outcome.issues[1].kind, "growth_rate");
}

#[test]
fn header_line_counts_as_invalid() {
    let outcome =
        read_records("Temperature Growth Bacteria\n20 1 2\n".as_bytes()).expect("read");
    assert!(outcome.header_skipped());
    assert_eq!(outcome.invalid_row_count(), 1);
    assert_eq!(outcome.valid_row_count(), 1);
    assert_eq!(
        outcome.issues[0].reason,
        "Looks like a header (Temperature Growth Bacteria)"
    );
}

#[test]
fn digit_free_line_after_first_is_a_parse_error() {
    let outcome = read_records("20 1 2\nfoo bar baz\n".as_bytes()).expect("read");
    assert!(!outcome.header_skipped());
    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, "not_numeric");
    assert!(outcome.issues[0].reason.contains("'foo'"));
}

#[test]
fn wrong_field_count_and_blank_lines_are_invalid() {
    let outcome = read_records("20 1 2\n20 1\n\n20 1 2 4\n".as_bytes()).expect("read");
    assert_eq!(outcome.valid_row_count(), 1);
    let kinds: Vec<&str> = outcome.issues.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec!["field_count", "field_count", "field_count"]);
    assert!(outcome.issues[0].reason.contains("Found: 2"));
}

#[test]
fn counts_add_up_to_total_lines() {
    let text = "temp rate code\n10 0 1\n60 3.2 4\n61 1 1\n30 1 7\n20 x 1\n15.5 2 3.0\n";
    let outcome = read_records(text.as_bytes()).expect("read");
    assert_eq!(outcome.total_lines, 7);
    assert_eq!(
        outcome.valid_row_count() + outcome.invalid_row_count(),
        outcome.total_lines
    );
    assert_eq!(outcome.valid_row_count(), 3);
}

#[test]
fn tabs_and_crlf_are_accepted() {
    let outcome = read_records("12\t0.5\t2\r\n13  0.7   3\r\n".as_bytes()).expect("read");
    assert_eq!(outcome.valid_row_count(), 2);
    assert!(outcome.issues.is_empty());
}

#[test]
fn loading_twice_is_identical() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("data.txt");
    write_file(&path, "25 1.5 1\n40 0.2 3\nbad\n");
    let a = load_dataset(&path).expect("first");
    let b = load_dataset(&path).expect("second");
    assert_eq!(a, b);
}

#[test]
fn missing_file_is_distinct_from_empty_file() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("nope.txt");
    match load_dataset(&missing) {
        Err(LoadError::NotFound(p)) => assert_eq!(p, missing),
        other => panic!("unexpected result: {other:?}"),
    }

    let (outcome, err) = load_dataset_or_empty(&missing);
    assert!(outcome.dataset.is_empty());
    assert_eq!(outcome.invalid_row_count(), 0);
    assert_eq!(err.map(|e| e.status()), Some("not_found"));

    let empty = dir.path().join("empty.txt");
    write_file(&empty, "");
    let (outcome, err) = load_dataset_or_empty(&empty);
    assert!(outcome.dataset.is_empty());
    assert!(err.is_none());
}

#[cfg(feature = "gz")]
#[test]
fn reads_gzip_input() {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("data.txt.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(b"25 1.5 1\n30 2.5 2\n").expect("encode");
    fs::write(&path, enc.finish().expect("finish")).expect("write");

    let outcome = load_dataset(&path).expect("load");
    assert_eq!(outcome.valid_row_count(), 2);
}

#[test]
fn bundled_sample_data() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_growth.txt");
    let outcome = load_dataset(&path).expect("load sample");
    assert!(outcome.header_skipped());
    assert_eq!(outcome.valid_row_count(), 16);
    assert_eq!(outcome.invalid_row_count(), 4);
    let kinds: Vec<&str> = outcome.issues.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec!["header", "temperature", "growth_rate", "bacteria_code"]
    );
}
