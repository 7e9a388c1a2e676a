//! FILENAME: core/grid-engine/src/view.rs
//! Grid View - Renderable output for a frontend.
//!
//! Everything in here is derived and read-only: header rows with merged
//! cells, and data rows whose cells line up with the flattened leaf columns.
//! A renderer walks `header_rows` then `rows` and never has to look at the
//! column tree again.

use serde::{Deserialize, Serialize};
use crate::definition::FieldValue;

// ============================================================================
// CELL VALUES
// ============================================================================

/// Display value for a grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Integer(i64),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Number(_))
    }

    /// Display string for this value. Empty cells render as "".
    pub fn format(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Integer(n) => n.to_string(),
            CellValue::Number(n) => format!("{}", n),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl From<&FieldValue> for CellValue {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Integer(n) => CellValue::Integer(*n),
            FieldValue::Number(n) => CellValue::Number(*n),
            FieldValue::Text(s) => CellValue::Text(s.clone()),
        }
    }
}

impl From<Option<&FieldValue>> for CellValue {
    fn from(value: Option<&FieldValue>) -> Self {
        value.map(CellValue::from).unwrap_or(CellValue::Empty)
    }
}

// ============================================================================
// HEADER
// ============================================================================

/// A single (possibly merged) header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    /// Header label.
    pub label: String,

    /// Nesting depth of the column this cell belongs to (0 = outermost).
    pub depth: usize,

    /// First leaf column covered by this cell.
    pub col_start: usize,

    /// Number of leaf columns covered (1 for leaves).
    pub col_span: usize,

    /// Number of header rows covered. Greater than 1 only for leaves that
    /// sit shallower than the deepest branch.
    pub row_span: usize,

    /// Bound field for leaf columns, None for groups.
    pub accessor: Option<String>,
}

impl HeaderCell {
    pub fn group(label: String, depth: usize, col_start: usize, col_span: usize) -> Self {
        HeaderCell {
            label,
            depth,
            col_start,
            col_span,
            row_span: 1,
            accessor: None,
        }
    }

    pub fn leaf(label: String, accessor: String, depth: usize, col_start: usize) -> Self {
        HeaderCell {
            label,
            depth,
            col_start,
            col_span: 1,
            row_span: 1,
            accessor: Some(accessor),
        }
    }

    pub fn with_row_span(mut self, span: usize) -> Self {
        self.row_span = span;
        self
    }

    pub fn is_group(&self) -> bool {
        self.accessor.is_none()
    }

    /// Whether this cell covers leaf column `col`.
    pub fn covers_col(&self, col: usize) -> bool {
        col >= self.col_start && col < self.col_start + self.col_span
    }
}

/// One row of the header. Cells are ordered by `col_start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderGroup {
    pub depth: usize,
    pub cells: Vec<HeaderCell>,
}

impl HeaderGroup {
    pub fn new(depth: usize) -> Self {
        HeaderGroup {
            depth,
            cells: Vec::new(),
        }
    }

    /// Labels in this row, left to right.
    pub fn labels(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.label.as_str()).collect()
    }

    /// Spans in this row, left to right.
    pub fn spans(&self) -> Vec<usize> {
        self.cells.iter().map(|c| c.col_span).collect()
    }
}

// ============================================================================
// DATA ROWS
// ============================================================================

/// A data cell keyed by the leaf accessor it was read through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub accessor: String,
    pub value: CellValue,
    /// Pre-formatted display string.
    pub formatted_value: String,
}

impl GridCell {
    pub fn new(accessor: String, value: CellValue) -> Self {
        let formatted_value = value.format();
        GridCell {
            accessor,
            value,
            formatted_value,
        }
    }
}

/// One data row, aligned to the leaf accessor order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    /// Position of the source record in the input.
    pub source_index: usize,
    pub cells: Vec<GridCell>,
}

impl GridRow {
    pub fn values(&self) -> Vec<&CellValue> {
        self.cells.iter().map(|c| &c.value).collect()
    }

    pub fn get(&self, accessor: &str) -> Option<&GridCell> {
        self.cells.iter().find(|c| c.accessor == accessor)
    }
}

// ============================================================================
// MAIN VIEW STRUCT
// ============================================================================

/// The complete grid model: header rows plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridView {
    /// Leaf accessors in column order.
    pub leaf_accessors: Vec<String>,

    /// Header rows, outermost first.
    pub header_rows: Vec<HeaderGroup>,

    /// Data rows in input order.
    pub rows: Vec<GridRow>,
}

impl GridView {
    pub fn column_count(&self) -> usize {
        self.leaf_accessors.len()
    }

    pub fn header_row_count(&self) -> usize {
        self.header_rows.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Gets a data cell at the specified position.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// Finds the header cell occupying slot (header_row, col), including
    /// cells merged down from a shallower row.
    pub fn header_cell_at(&self, header_row: usize, col: usize) -> Option<&HeaderCell> {
        self.header_rows
            .iter()
            .take(header_row + 1)
            .flat_map(|group| group.cells.iter())
            .find(|cell| cell.covers_col(col) && cell.depth + cell.row_span > header_row)
    }
}
