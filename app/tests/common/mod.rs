//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for the table front end integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use app_lib::{Cli, OutputFormat};
use tempfile::TempDir;

/// Config in the same shape as the built-in table, with a single row.
pub const BINANCE_CONFIG: &str = r#"{
    "title": "Single chain",
    "columns": [
        {"header": "Name", "columns": [
            {"header": "Chain", "accessor": "chainName"},
            {"header": "Token", "accessor": "tokenName"}
        ]},
        {"header": "Coefficient", "columns": [
            {"header": "Current Value", "accessor": "currVal"},
            {"header": "Previous Value", "accessor": "prevVal"},
            {"header": "Change", "accessor": "changeVal"}
        ]}
    ],
    "records": [
        {"chainName": "Binance", "tokenName": "BNB", "currVal": 7, "prevVal": 7, "changeVal": 0}
    ]
}"#;

/// Config whose rows come from per-token coefficients.
pub const CHAINS_CONFIG: &str = r#"{
    "columns": [
        {"header": "Chain", "accessor": "chainName"},
        {"header": "Change", "accessor": "changeVal"}
    ],
    "chains": {
        "SOL": {"prev": 20, "curr": 19},
        "ATOM": {"prev": 6, "curr": 7}
    }
}"#;

/// Two leaves bound to the same field.
pub const DUPLICATE_CONFIG: &str = r#"{
    "columns": [
        {"header": "Current Value", "accessor": "currVal"},
        {"header": "Again", "accessor": "currVal"}
    ],
    "records": []
}"#;

/// Temporary directory holding config files for one test.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Writes `contents` to `name` inside the harness directory.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn cli(config: Option<PathBuf>, format: OutputFormat) -> Cli {
    Cli {
        config_file: None,
        config,
        format,
        log_file: None,
    }
}
