//! End-to-end CLI tests for chatplot.
//!
//! These tests run the actual binary against chat logs in a temporary data
//! directory and check its output.
//!
//! Saving PNG/SVG charts draws text, which needs a system font; those tests
//! are ignored by default. Everything else runs with `--no-save`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! cargo test --test cli_e2e -- --ignored   # with fonts installed
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const FRIENDS_LOG: &str = "\
1/5/23, 10:00 - Alice: Hello everyone
1/5/23, 10:02 - Bob: <Media omitted>
1/6/23, 11:30 - Alice: Lunch?
anyone - anywhere
2/1/23, 9:00 - Carol: Back from holidays
2/2/23, 9:05 - Bob: welcome back
3/1/23, 8:00 - Alice: last one
";

/// Creates `<tmp>/data/friends.txt` and returns the temp dir.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("friends.txt"), FRIENDS_LOG).unwrap();
    fs::write(data.join("broken.txt"), "2/30/23, 10:00 - Alice: x\n2/28/23, 10:00 - Bob: y\n").unwrap();
    dir
}

fn chatplot_cmd(dir: &Path) -> Command {
    let mut cmd = Command::from_std(std::process::Command::new(env!("CARGO_BIN_EXE_chatplot")));
    cmd.current_dir(dir);
    cmd
}

// ============================================================================
// Summary output
// ============================================================================

mod summary {
    use super::*;

    #[test]
    fn test_no_save_prints_tables() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["friends", "--no-save"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 5 messages"))
            .stdout(predicate::str::contains("Messages per month [monthly]"))
            .stdout(predicate::str::contains("01/23"))
            .stdout(predicate::str::contains("02/23"))
            .stdout(predicate::str::contains("03/23").not())
            .stdout(predicate::str::contains("Done"));

        assert!(!fixtures.path().join("plots").exists());
    }

    #[test]
    fn test_include_last() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["friends", "--no-save", "--include-last"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 6 messages"))
            .stdout(predicate::str::contains("03/23"));
    }

    #[test]
    fn test_per_sender() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["friends", "--no-save", "--per-sender"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[monthly_Alice]"))
            .stdout(predicate::str::contains("[monthly_Bob]"))
            .stdout(predicate::str::contains("[monthly_Carol]"));
    }

    #[test]
    fn test_custom_data_dir() {
        let fixtures = setup_fixtures();
        let elsewhere = tempdir().unwrap();

        chatplot_cmd(elsewhere.path())
            .args(["friends", "--no-save", "--data-dir"])
            .arg(fixtures.path().join("data"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 5 messages"));
    }
}

// ============================================================================
// Filters
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_filter_by_sender() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["friends", "--no-save", "--from", "alice"])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 messages after filtering"));
    }

    #[test]
    fn test_filter_date_range() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["friends", "--no-save", "--after", "2023-02-01", "--before", "2023-02-28"])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 messages after filtering"))
            .stdout(predicate::str::contains("01/23").not());
    }

    #[test]
    fn test_bad_filter_date() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["friends", "--no-save", "--after", "02/01/2023"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"))
            .stderr(predicate::str::contains("YYYY-MM-DD"));
    }
}

// ============================================================================
// Reports
// ============================================================================

mod reports {
    use super::*;

    #[test]
    fn test_csv_report() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["friends", "--no-save", "--report", "csv"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Writing CSV report"));

        let dir = fixtures.path().join("plots").join("friends");
        let monthly = fs::read_to_string(dir.join("monthly.csv")).unwrap();
        assert!(monthly.starts_with("Month;Total;Text;Media"));
        assert!(monthly.contains("01/23;3;2;1"));

        let senders = fs::read_to_string(dir.join("senders.csv")).unwrap();
        assert!(senders.contains("Alice;2;"));
        assert!(senders.contains("Bob;1;"));
    }

    #[test]
    fn test_json_report_custom_output() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["friends", "--no-save", "--report", "json", "-o", "out"])
            .assert()
            .success();

        let path = fixtures.path().join("out").join("friends").join("summary.json");
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["chat_name"], "friends");
        assert_eq!(value["messages"], 5);
        assert_eq!(value["months"].as_array().unwrap().len(), 2);
    }
}

// ============================================================================
// Saved charts
// ============================================================================

mod saved_charts {
    use super::*;

    #[test]
    #[ignore = "needs a system sans-serif font"]
    fn test_png_charts() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["friends"])
            .assert()
            .success()
            .stdout(predicate::str::contains("4 charts saved"));

        let dir = fixtures.path().join("plots").join("friends");
        for name in ["monthly.png", "messages.png", "characters.png", "average_length.png"] {
            assert!(dir.join(name).exists(), "{name} missing");
        }
    }

    #[test]
    #[ignore = "needs a system sans-serif font"]
    fn test_svg_charts() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["friends", "--format", "svg", "-o", "svg_out"])
            .assert()
            .success();

        let monthly = fixtures.path().join("svg_out").join("friends").join("monthly.svg");
        assert!(fs::read_to_string(monthly).unwrap().contains("<svg"));
    }
}

// ============================================================================
// Error handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_chat() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["nobody", "--no-save"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_invalid_date_in_log() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["broken", "--no-save"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("2/30/23, 10:00"));
    }

    #[test]
    fn test_chat_name_with_separator() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["../friends"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_chat_name_with_separator_without_saving() {
        let fixtures = setup_fixtures();
        // `data/sub/../x.txt` exists, so only the name check can stop the run.
        let sub = fixtures.path().join("data").join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(fixtures.path().join("data").join("x.txt"), FRIENDS_LOG).unwrap();

        chatplot_cmd(fixtures.path())
            .args(["../x", "--no-save", "--report", "json", "--data-dir"])
            .arg(&sub)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid chat name"));

        assert!(!fixtures.path().join("x").exists());
        assert!(!fixtures.path().join("plots").exists());
    }

    #[test]
    fn test_dot_chat_name_rejected() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["..", "--no-save"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid chat name"));
    }

    #[test]
    fn test_unknown_format() {
        let fixtures = setup_fixtures();

        chatplot_cmd(fixtures.path())
            .args(["friends", "--format", "gif"])
            .assert()
            .failure();
    }

    #[test]
    fn test_help() {
        chatplot_cmd(Path::new("."))
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--no-save"))
            .stdout(predicate::str::contains("--per-sender"));
    }
}
