//! FILENAME: core/grid-engine/src/error.rs

use thiserror::Error;

/// Raised when a column definition tree cannot be resolved into a grid schema.
/// Positions are reported as index paths, e.g. `columns[1].columns[0]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Column definitions are empty")]
    EmptyColumns,

    #[error("Leaf column '{header}' at {position} has no accessor")]
    MissingAccessor { header: String, position: String },

    #[error("Column at {position} has no header")]
    MissingHeader { position: String },

    #[error("Group column '{header}' at {position} has no child columns")]
    EmptyGroup { header: String, position: String },

    #[error("Accessor '{accessor}' is bound by more than one leaf column (second at {position})")]
    DuplicateAccessor { accessor: String, position: String },
}
