//! Borderless table output
//!
//! Columns are left-justified to their widest cell and separated by a single
//! tab. Trailing padding is stripped from each line.

use comfy_table::{presets::NOTHING, CellAlignment, Table, TableComponent};
use std::io::Write;

use crate::error::Result;

/// Write a header line followed by one aligned line per row
pub fn write_table<W, I>(out: &mut W, headers: &[&str], rows: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Vec<String>>,
{
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_style(TableComponent::VerticalLines, '\t')
        .set_header(headers.to_vec());

    for row in rows {
        table.add_row(row);
    }

    for column in table.column_iter_mut() {
        column.set_padding((0, 0));
        column.set_cell_alignment(CellAlignment::Left);
    }

    for line in table.lines() {
        writeln!(out, "{}", line.trim_end_matches(' '))?;
    }
    Ok(())
}
