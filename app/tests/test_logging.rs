//! FILENAME: app/tests/test_logging.rs
//! PURPOSE: Unified log file format, including records from the core crates.
//! Kept in its own test binary since the logger is process-global.

mod common;

use app_lib::logging::{close_log_file, init_log_file, install_logger, parse_level};
use app_lib::{render_table, OutputFormat, TableConfig};
use common::TestHarness;

#[test]
fn test_log_file_collects_app_and_core_lines() {
    let harness = TestHarness::new();
    let log_path = harness.path("logs/table.log");

    install_logger(log::LevelFilter::Debug);
    init_log_file(&log_path).unwrap();
    render_table(&TableConfig::builtin(), OutputFormat::Text).unwrap();
    close_log_file();

    let content = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert!(lines[0].contains("|I|SYS|session start "), "{}", lines[0]);
    assert!(lines.iter().any(|l| l.ends_with("|D|TABLE|ENTER render_table format=Text")));
    assert!(lines.iter().any(|l| l.ends_with("|D|SCHEMA|resolved 5 leaf columns over 2 header rows")));
    assert!(lines.iter().any(|l| l.ends_with("|D|GRID|built 5 rows x 5 columns")));
    assert!(lines.iter().any(|l| l.ends_with("|D|TABLE|EXIT render_table rows=5 cols=5")));

    // Sequence numbers strictly increase down the file.
    let seqs: Vec<u64> = lines
        .iter()
        .map(|l| l.split('|').next().unwrap().parse().unwrap())
        .collect();
    assert!(seqs.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(parse_level("warn"), log::LevelFilter::Warn);
    assert_eq!(parse_level("DEBUG"), log::LevelFilter::Debug);
    assert_eq!(parse_level("loud"), log::LevelFilter::Info);
}
