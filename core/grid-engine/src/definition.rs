//! FILENAME: core/grid-engine/src/definition.rs
//! Grid Definition - The caller-supplied inputs.
//!
//! This module contains the types needed to DESCRIBE a table:
//! - `ColumnDef`: a leaf bound to a record field, or a group of columns
//! - `Record`: one flat row of source data
//!
//! Both are immutable snapshots for the duration of a render request and
//! deserialize from the same JSON shape the web frontend used
//! (`Header` is accepted as an alias of `header`).

use std::collections::BTreeMap;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// COLUMN DEFINITION
// ============================================================================

/// A column in the table header tree.
///
/// Groups exist only to put a shared header over their children; leaves are
/// bound to a record field through `accessor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColumnDef {
    /// Header spanning every leaf beneath it.
    Group {
        header: String,
        columns: Vec<ColumnDef>,
    },
    /// Column bound directly to a record field.
    Leaf {
        header: String,
        accessor: String,
    },
}

impl ColumnDef {
    pub fn leaf(header: impl Into<String>, accessor: impl Into<String>) -> Self {
        ColumnDef::Leaf {
            header: header.into(),
            accessor: accessor.into(),
        }
    }

    pub fn group(header: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        ColumnDef::Group {
            header: header.into(),
            columns,
        }
    }

    /// The header label of this column.
    pub fn header(&self) -> &str {
        match self {
            ColumnDef::Group { header, .. } | ColumnDef::Leaf { header, .. } => header,
        }
    }

    /// The accessor, or None for groups.
    pub fn accessor(&self) -> Option<&str> {
        match self {
            ColumnDef::Leaf { accessor, .. } => Some(accessor),
            ColumnDef::Group { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ColumnDef::Leaf { .. })
    }

    /// Number of leaf columns at or below this node (a leaf counts as 1).
    pub fn leaf_count(&self) -> usize {
        match self {
            ColumnDef::Leaf { .. } => 1,
            ColumnDef::Group { columns, .. } => columns.iter().map(ColumnDef::leaf_count).sum(),
        }
    }

    /// Nesting depth of this subtree (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            ColumnDef::Leaf { .. } => 1,
            ColumnDef::Group { columns, .. } => {
                1 + columns.iter().map(ColumnDef::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Wire shape of a column node. A node must carry exactly one of
/// `accessor` or `columns`.
#[derive(Deserialize)]
struct RawColumnDef {
    #[serde(alias = "Header")]
    header: String,
    #[serde(default)]
    accessor: Option<String>,
    #[serde(default)]
    columns: Option<Vec<ColumnDef>>,
}

impl TryFrom<RawColumnDef> for ColumnDef {
    type Error = String;

    fn try_from(raw: RawColumnDef) -> Result<Self, Self::Error> {
        match (raw.accessor, raw.columns) {
            (Some(accessor), None) => Ok(ColumnDef::Leaf {
                header: raw.header,
                accessor,
            }),
            (None, Some(columns)) => Ok(ColumnDef::Group {
                header: raw.header,
                columns,
            }),
            (Some(_), Some(_)) => Err(format!(
                "column '{}' has both an accessor and child columns",
                raw.header
            )),
            (None, None) => Err(format!(
                "column '{}' has neither an accessor nor child columns",
                raw.header
            )),
        }
    }
}

impl<'de> Deserialize<'de> for ColumnDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawColumnDef::deserialize(deserializer)?;
        ColumnDef::try_from(raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// RECORDS
// ============================================================================

/// A scalar value stored in a record field.
///
/// Integers are kept apart from floats so whole numbers display without a
/// fractional part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// One row of source data: field name -> scalar value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
