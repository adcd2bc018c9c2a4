//! End-to-end `clean` command runs against real files.

use std::fs;

use tabwash_cli::cli::{CleanArgs, InspectArgs};
use tabwash_cli::commands::{run_clean, run_inspect};
use tempfile::tempdir;

const MESSY_CSV: &str = " Region , Total Sales ,Order Date
north,10,2024-01-10
south,twenty,2024-01-11
north,10,2024-01-10
east,,2024-01-13
west,15,not recorded
";

#[test]
fn clean_writes_outputs_next_to_input() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("sales.csv");
    fs::write(&input, MESSY_CSV).expect("write input");

    let outcome = run_clean(&CleanArgs {
        input: input.clone(),
        output: None,
        report: None,
        dry_run: false,
    })
    .expect("clean");

    assert_eq!(outcome.rows_loaded, 5);
    assert_eq!(outcome.rows_cleaned, 4);
    assert_eq!(outcome.report.duplicates_removed, 1);
    assert_eq!(outcome.output, Some(dir.path().join("sales_cleaned.csv")));
    assert_eq!(outcome.report_path, Some(dir.path().join("sales_report.json")));

    let cleaned = fs::read_to_string(dir.path().join("sales_cleaned.csv")).expect("cleaned csv");
    let mut lines = cleaned.lines();
    assert_eq!(lines.next(), Some("region,total_sales,order_date"));
    // No empty cells survive cleaning.
    assert!(lines.all(|line| !line.split(',').any(str::is_empty)));

    let report = fs::read_to_string(dir.path().join("sales_report.json")).expect("report json");
    assert!(report.contains("\"duplicates_removed\": 1"));
}

#[test]
fn clean_promotes_and_reports_types() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("sales.csv");
    fs::write(&input, MESSY_CSV).expect("write input");

    let outcome = run_clean(&CleanArgs {
        input,
        output: None,
        report: None,
        dry_run: true,
    })
    .expect("clean");

    // total_sales: 10, 20 (word), blank, 15 -> 3 of 4 rows parse (75%).
    let sales = outcome.report.decision("total_sales").expect("decision");
    assert!(sales.promoted());
    // order_date: 3 of 4 rows parse (75%).
    let date = outcome.report.decision("order_date").expect("decision");
    assert!(date.promoted());
    assert_eq!(outcome.metrics.primary_column.as_deref(), Some("total_sales"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("sales.csv");
    fs::write(&input, MESSY_CSV).expect("write input");

    let outcome = run_clean(&CleanArgs {
        input,
        output: None,
        report: None,
        dry_run: true,
    })
    .expect("clean");

    assert_eq!(outcome.output, None);
    assert!(!dir.path().join("sales_cleaned.csv").exists());
    assert!(!dir.path().join("sales_report.json").exists());
    assert_eq!(outcome.rows_cleaned, 4);
}

#[test]
fn missing_input_is_an_error() {
    let result = run_clean(&CleanArgs {
        input: "/nonexistent/input.csv".into(),
        output: None,
        report: None,
        dry_run: true,
    });
    assert!(result.is_err());
}

#[test]
fn inspect_profiles_without_cleaning() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("sales.csv");
    fs::write(&input, MESSY_CSV).expect("write input");

    let (rows, profiles) = run_inspect(&InspectArgs { input }).expect("inspect");
    assert_eq!(rows, 5);
    assert_eq!(profiles.len(), 3);
    // Raw header is untouched by inspect.
    assert_eq!(profiles[0].name, " Region ");
    assert_eq!(profiles[1].non_missing, 4);
}
