//! FILENAME: app/src/render.rs
//! PURPOSE: Plain-text rendering of a grid view.
//! CONTEXT: Merged header cells are centred over their column span. A slot
//! covered by a header cell from a shallower row prints blank. Numbers are
//! right-aligned, everything else left-aligned.

use grid_engine::{GridRow, GridView};

const SEPARATOR: &str = " | ";

fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Width of `span` columns starting at `start`, separators included.
fn span_width(widths: &[usize], start: usize, span: usize) -> usize {
    let inner: usize = widths.iter().skip(start).take(span).sum();
    inner + SEPARATOR.len() * span.saturating_sub(1)
}

/// Computes per-column widths from leaf headers, data, then merged headers.
fn column_widths(view: &GridView) -> Vec<usize> {
    let mut widths = vec![0usize; view.column_count()];

    let header_cells = || view.header_rows.iter().flat_map(|g| g.cells.iter());

    for cell in header_cells().filter(|c| c.col_span == 1) {
        if let Some(w) = widths.get_mut(cell.col_start) {
            *w = (*w).max(text_width(&cell.label));
        }
    }

    for row in &view.rows {
        for (w, cell) in widths.iter_mut().zip(&row.cells) {
            *w = (*w).max(text_width(&cell.formatted_value));
        }
    }

    // Narrow groups first so wider ancestors see the final inner widths.
    let mut groups: Vec<_> = header_cells().filter(|c| c.col_span > 1).collect();
    groups.sort_by_key(|c| c.col_span);
    for cell in groups {
        let available = span_width(&widths, cell.col_start, cell.col_span);
        let needed = text_width(&cell.label);
        if needed > available {
            if let Some(w) = widths.get_mut(cell.col_start + cell.col_span - 1) {
                *w += needed - available;
            }
        }
    }

    widths
}

fn framed(pieces: &[String]) -> String {
    format!("| {} |", pieces.join(SEPARATOR))
}

fn header_line(view: &GridView, widths: &[usize], header_row: usize) -> String {
    let mut pieces = Vec::new();
    let mut col = 0;

    while col < widths.len() {
        match view.header_cell_at(header_row, col) {
            Some(cell) => {
                let width = span_width(widths, cell.col_start, cell.col_span);
                if cell.depth == header_row {
                    pieces.push(format!("{:^width$}", cell.label, width = width));
                } else {
                    pieces.push(" ".repeat(width));
                }
                col = cell.col_start + cell.col_span;
            }
            None => {
                pieces.push(" ".repeat(widths.get(col).copied().unwrap_or(0)));
                col += 1;
            }
        }
    }

    framed(&pieces)
}

fn separator_line(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format!("|-{}-|", dashes.join("-+-"))
}

fn data_line(row: &GridRow, widths: &[usize]) -> String {
    let pieces: Vec<String> = row
        .cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            if cell.value.is_numeric() {
                format!("{:>width$}", cell.formatted_value, width = width)
            } else {
                format!("{:<width$}", cell.formatted_value, width = width)
            }
        })
        .collect();
    framed(&pieces)
}

/// Renders the view as a text table, optionally preceded by a title line.
pub fn render_text(view: &GridView, title: Option<&str>) -> String {
    let widths = column_widths(view);
    let mut lines = Vec::with_capacity(view.header_row_count() + view.row_count() + 2);

    if let Some(title) = title {
        lines.push(title.to_string());
    }
    for header_row in 0..view.header_row_count() {
        lines.push(header_line(view, &widths, header_row));
    }
    lines.push(separator_line(&widths));
    for row in &view.rows {
        lines.push(data_line(row, &widths));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_engine::{render_grid, ColumnDef, Record};

    #[test]
    fn test_group_label_widens_last_column() {
        let columns = vec![ColumnDef::group(
            "A very long group label",
            vec![ColumnDef::leaf("x", "x"), ColumnDef::leaf("y", "y")],
        )];
        let view = render_grid(&columns, &[Record::new().with("x", 1).with("y", 2)]).unwrap();
        let widths = column_widths(&view);

        assert_eq!(span_width(&widths, 0, 2), "A very long group label".len());
        assert_eq!(widths[0], 1);
    }

    #[test]
    fn test_merged_leaf_prints_blank_below() {
        let columns = vec![
            ColumnDef::leaf("Id", "id"),
            ColumnDef::group("Pair", vec![ColumnDef::leaf("A", "a"), ColumnDef::leaf("B", "b")]),
        ];
        let view = render_grid(&columns, &[]).unwrap();
        let text = render_text(&view, None);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "| Id | Pair  |");
        assert_eq!(lines[1], "|    | A | B |");
        assert_eq!(lines[2], "|----+---+---|");
        assert_eq!(lines.len(), 3);
    }
}
