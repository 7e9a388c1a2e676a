//! FILENAME: core/grid-engine/src/schema.rs
//! Schema Resolver - Flattens a column tree into leaf accessors and header rows.
//!
//! The tree is walked depth-first, left to right. Every leaf appends its
//! accessor to the flat column list; every group records a header cell at its
//! own depth spanning the leaves beneath it. The header has one row per level
//! of the deepest branch. Leaves that end above the last header row are
//! stretched down with `row_span` instead of being padded with blank cells.

use std::collections::HashSet;
use log::debug;
use crate::definition::ColumnDef;
use crate::error::SchemaError;
use crate::view::{HeaderCell, HeaderGroup};

/// Output of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchema {
    /// Leaf accessors in column order.
    pub leaf_accessors: Vec<String>,
    /// Header rows, outermost first.
    pub header_rows: Vec<HeaderGroup>,
}

impl ResolvedSchema {
    pub fn column_count(&self) -> usize {
        self.leaf_accessors.len()
    }

    pub fn header_row_count(&self) -> usize {
        self.header_rows.len()
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

struct SchemaResolver {
    max_depth: usize,
    leaf_accessors: Vec<String>,
    seen: HashSet<String>,
    header_rows: Vec<HeaderGroup>,
}

impl SchemaResolver {
    fn new(max_depth: usize) -> Self {
        SchemaResolver {
            max_depth,
            leaf_accessors: Vec::new(),
            seen: HashSet::new(),
            header_rows: (0..max_depth).map(HeaderGroup::new).collect(),
        }
    }

    /// Visits one column and returns its span in leaf columns.
    fn visit(&mut self, column: &ColumnDef, depth: usize, position: String) -> Result<usize, SchemaError> {
        if column.header().trim().is_empty() {
            return Err(SchemaError::MissingHeader { position });
        }

        match column {
            ColumnDef::Leaf { header, accessor } => {
                if accessor.trim().is_empty() {
                    return Err(SchemaError::MissingAccessor {
                        header: header.clone(),
                        position,
                    });
                }
                if !self.seen.insert(accessor.clone()) {
                    return Err(SchemaError::DuplicateAccessor {
                        accessor: accessor.clone(),
                        position,
                    });
                }

                let col_start = self.leaf_accessors.len();
                self.leaf_accessors.push(accessor.clone());

                let cell = HeaderCell::leaf(header.clone(), accessor.clone(), depth, col_start)
                    .with_row_span(self.max_depth - depth);
                self.push_cell(depth, cell);
                Ok(1)
            }
            ColumnDef::Group { header, columns } => {
                if columns.is_empty() {
                    return Err(SchemaError::EmptyGroup {
                        header: header.clone(),
                        position,
                    });
                }

                let col_start = self.leaf_accessors.len();
                let mut span = 0;
                for (i, child) in columns.iter().enumerate() {
                    span += self.visit(child, depth + 1, format!("{}.columns[{}]", position, i))?;
                }

                // Children sit in deeper rows, so pushing after them keeps
                // this row ordered by col_start.
                self.push_cell(depth, HeaderCell::group(header.clone(), depth, col_start, span));
                Ok(span)
            }
        }
    }

    fn push_cell(&mut self, depth: usize, cell: HeaderCell) {
        if let Some(row) = self.header_rows.get_mut(depth) {
            row.cells.push(cell);
        }
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Resolves a column tree into its flat leaf accessors and header rows.
pub fn resolve(columns: &[ColumnDef]) -> Result<ResolvedSchema, SchemaError> {
    if columns.is_empty() {
        return Err(SchemaError::EmptyColumns);
    }

    let max_depth = columns.iter().map(ColumnDef::depth).max().unwrap_or(0);
    let mut resolver = SchemaResolver::new(max_depth);

    for (i, column) in columns.iter().enumerate() {
        resolver.visit(column, 0, format!("columns[{}]", i))?;
    }

    debug!(
        target: "SCHEMA",
        "resolved {} leaf columns over {} header rows",
        resolver.leaf_accessors.len(),
        resolver.header_rows.len()
    );

    Ok(ResolvedSchema {
        leaf_accessors: resolver.leaf_accessors,
        header_rows: resolver.header_rows,
    })
}
