//! Light box-drawing table renderer.

use crate::Formatter;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as Grid};
use sift_core::schema::Table;
use sift_core::{CancelFlag, DataType, Result};

/// Light borders with a single header rule and no rules between body rows.
///
/// Component order follows `comfy_table::TableComponent`.
const LIGHT_BOX: &str = "││──├─┼┤│    ┬┴┌┐└┘";

/// Renders tables with light box-drawing borders and upper-cased headers.
///
/// Number columns are right-aligned, string columns left-aligned. Widths are measured
/// in terminal columns, so wide characters keep the borders straight. A table without
/// columns renders as an empty string.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxFormatter;

impl BoxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for BoxFormatter {
    fn format(&self, table: &Table, cancel: &CancelFlag) -> Result<String> {
        if table.column_count() == 0 {
            return Ok(String::new());
        }

        let mut grid = Grid::new();
        grid.load_preset(LIGHT_BOX)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(
                table
                    .fields()
                    .iter()
                    .map(|f| Cell::new(f.name().to_uppercase())),
            );

        let alignments: Vec<CellAlignment> = table
            .fields()
            .iter()
            .map(|f| match f.data_type() {
                DataType::Number => CellAlignment::Right,
                DataType::String => CellAlignment::Left,
            })
            .collect();

        for index in 0..table.row_count() {
            cancel.check()?;
            let row: Vec<Cell> = table
                .columns()
                .iter()
                .zip(&alignments)
                .map(|(column, alignment)| {
                    let text = column.get(index).map(ToString::to_string).unwrap_or_default();
                    Cell::new(text).set_alignment(*alignment)
                })
                .collect();
            grid.add_row(row);
        }

        Ok(grid.to_string())
    }
}
