//! FILENAME: core/grid-engine/src/engine.rs
//! Grid Engine - Turns records into rows of cells.
//!
//! No sorting, filtering or aggregation happens here: one row per record,
//! in input order, one cell per leaf accessor. A field the record does not
//! carry becomes an empty cell.

use log::debug;
use crate::definition::{ColumnDef, Record};
use crate::error::SchemaError;
use crate::schema::resolve;
use crate::view::{CellValue, GridCell, GridRow, GridView};

fn build_row(leaf_accessors: &[String], source_index: usize, record: &Record) -> GridRow {
    let cells = leaf_accessors
        .iter()
        .map(|accessor| GridCell::new(accessor.clone(), CellValue::from(record.get(accessor))))
        .collect();

    GridRow { source_index, cells }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Builds one row per record, cells ordered by `leaf_accessors`.
pub fn build(leaf_accessors: &[String], records: &[Record]) -> Vec<GridRow> {
    let rows: Vec<GridRow> = records
        .iter()
        .enumerate()
        .map(|(i, record)| build_row(leaf_accessors, i, record))
        .collect();

    debug!(target: "GRID", "built {} rows x {} columns", rows.len(), leaf_accessors.len());
    rows
}

/// Resolves `columns` and builds the full grid model for `records`.
pub fn render_grid(columns: &[ColumnDef], records: &[Record]) -> Result<GridView, SchemaError> {
    let schema = resolve(columns)?;
    let rows = build(&schema.leaf_accessors, records);

    Ok(GridView {
        leaf_accessors: schema.leaf_accessors,
        header_rows: schema.header_rows,
        rows,
    })
}
