//! FILENAME: app/src/config.rs
//! Table configuration: which columns to show and where the rows come from.
//! All config-facing types use camelCase via serde rename_all.

use std::path::Path;
use serde::{Deserialize, Serialize};
use grid_engine::{ColumnDef, Record};
use nakamoto::{coefficient_columns, ChainState, RecordProvider, StaticProvider};
use crate::{log_debug, log_info};

pub const DEFAULT_TITLE: &str = "Nakamoto Coefficients";

/// A complete table description, as loaded from a JSON file.
///
/// Rows come from `records` followed by one row per entry of `chains`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    #[serde(default)]
    pub title: Option<String>,

    pub columns: Vec<ColumnDef>,

    #[serde(default)]
    pub records: Vec<Record>,

    /// Per-token coefficients, rendered with the standard chain fields.
    #[serde(default)]
    pub chains: Option<ChainState>,
}

impl TableConfig {
    /// The built-in coefficient table.
    pub fn builtin() -> Self {
        TableConfig {
            title: Some(DEFAULT_TITLE.to_string()),
            columns: coefficient_columns(),
            records: StaticProvider.records(),
            chains: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid table config: {}", e))
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self, String> {
        log_info!("CONFIG", "loading {}", path.display());

        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let config = Self::from_json(&json)?;

        log_debug!(
            "CONFIG",
            "columns={} records={} chains={}",
            config.columns.len(),
            config.records.len(),
            config.chains.as_ref().map(ChainState::len).unwrap_or(0)
        );
        Ok(config)
    }
}

impl RecordProvider for TableConfig {
    fn records(&self) -> Vec<Record> {
        let mut records = self.records.clone();
        if let Some(chains) = &self.chains {
            records.extend(chains.records());
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_engine::FieldValue;

    #[test]
    fn test_builtin_config() {
        let config = TableConfig::builtin();
        assert_eq!(config.title.as_deref(), Some(DEFAULT_TITLE));
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.records().len(), 5);
    }

    #[test]
    fn test_records_then_chains() {
        let config = TableConfig::from_json(
            r#"{
                "columns": [{"header": "Chain", "accessor": "chainName"}],
                "records": [{"chainName": "Custom"}],
                "chains": {"MINA": {"prev": 11, "curr": 12}}
            }"#,
        )
        .unwrap();

        let records = config.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("chainName"), Some(&FieldValue::from("Custom")));
        assert_eq!(records[1].get("chainName"), Some(&FieldValue::from("Mina Protocol")));
        assert_eq!(records[1].get("changeVal"), Some(&FieldValue::Integer(1)));
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = TableConfig::from_json(
            r#"{"columns": [{"header": "Chain", "accessor": "chainName"}],
                "chains": {"LUNA": {"prev": 1, "curr": 2}}}"#,
        )
        .unwrap_err();
        assert!(err.starts_with("Invalid table config"));
    }

    #[test]
    fn test_ambiguous_column_rejected() {
        let err = TableConfig::from_json(
            r#"{"columns": [{"header": "Chain", "accessor": "chainName",
                             "columns": [{"header": "Token", "accessor": "tokenName"}]}]}"#,
        )
        .unwrap_err();
        assert!(err.contains("both an accessor and child columns"), "{}", err);
    }
}
