use super::*;
use clap::Parser;
use std::fs;
use tempfile::tempdir;

#[test]
fn stats_collects_repeated_statistics_and_filters() {
    let cli = Cli::parse_from([
        "bacteria-growth",
        "stats",
        "--input",
        "data.txt",
        "-s",
        "rows",
        "--statistic",
        "Mean Growth Rate",
        "--bacteria",
        "3",
        "--growth-min",
        "0.5",
    ]);
    match cli.command {
        Command::Stats(args) => {
            assert_eq!(args.statistics, vec!["rows", "Mean Growth Rate"]);
            assert_eq!(args.filter.bacteria, Some(3));
            assert_eq!(args.filter.growth_min, Some(0.5));
            assert_eq!(args.filter.growth_max, None);
        }
        _ => panic!("expected stats command"),
    }
}

#[test]
fn bacteria_out_of_range_is_rejected() {
    let res = Cli::try_parse_from([
        "bacteria-growth",
        "stats",
        "--input",
        "data.txt",
        "--bacteria",
        "5",
    ]);
    assert!(res.is_err());
}

#[test]
fn unknown_statistic_is_rejected_on_resolve() {
    let args = FilterArgs::default();
    assert!(args.resolve(&["median".to_string()]).is_err());
    let cfg = args.resolve(&["7".to_string()]).expect("resolve");
    assert_eq!(
        cfg.statistics().expect("stats"),
        vec![crate::stats::Statistic::MeanHotGrowthRate]
    );
}

#[test]
fn run_writes_all_outputs() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("data.txt");
    fs::write(&input, "Temperature Growth Bacteria\n25 1.5 1\n70 2.0 2\n30 -1 3\n52 2.0 1\n")
        .expect("write");
    let out = dir.path().join("out");

    let cli = Cli::parse_from([
        "bacteria-growth",
        "run",
        "--input",
        input.to_str().expect("utf8 path"),
        "--out",
        out.to_str().expect("utf8 path"),
        "--bacteria",
        "1",
    ]);
    cli.dispatch().expect("run");

    for name in [
        "validate.tsv",
        "row_issues.tsv",
        "filtered.tsv",
        "charts.json",
        "summary.json",
        "report.txt",
    ] {
        assert!(out.join(name).is_file(), "missing {name}");
    }
    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("summary.json")).expect("read"))
            .expect("parse");
    assert_eq!(summary["input"]["valid_rows"], 2);
    assert_eq!(summary["input"]["invalid_rows"], 3);
    assert_eq!(summary["filter"]["matching_rows"], 2);
    let report = fs::read_to_string(out.join("report.txt")).expect("read");
    assert!(report.contains("Mean Hot Growth Rate: 2"));
}

#[test]
fn validate_tolerates_missing_input() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("out");
    let cli = Cli::parse_from([
        "bacteria-growth",
        "validate",
        "--input",
        dir.path().join("missing.txt").to_str().expect("utf8 path"),
        "--out",
        out.to_str().expect("utf8 path"),
    ]);
    cli.dispatch().expect("validate");
    let validate = fs::read_to_string(out.join("validate.tsv")).expect("read");
    assert!(validate.contains("status\tnot_found\n"));
    assert!(validate.contains("valid_rows\t0\n"));
}

#[test]
fn run_fails_on_missing_input() {
    let dir = tempdir().expect("tempdir");
    let cli = Cli::parse_from([
        "bacteria-growth",
        "run",
        "--input",
        dir.path().join("missing.txt").to_str().expect("utf8 path"),
        "--out",
        dir.path().join("out").to_str().expect("utf8 path"),
    ]);
    assert!(cli.dispatch().is_err());
}
