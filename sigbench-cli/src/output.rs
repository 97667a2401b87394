use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Render `data` for the terminal via `display_fn`, or dump it as pretty JSON
/// when `--json` is set.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Build a borderless table with the given headers.
///
/// Columns are sized to the widest entry and separated by a 2-space gap; no borders
/// or rules, just whitespace-aligned terminal output.
pub fn plain_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());

    let last = headers.len().saturating_sub(1);
    for i in 0..headers.len() {
        if let Some(col) = table.column_mut(i) {
            let pad_left = if i == 0 { 0 } else { 1 };
            let pad_right = if i == last { 0 } else { 1 };
            col.set_padding((pad_left, pad_right));
        }
    }

    table
}

/// Right-align one column, for counts and other numeric cells.
pub fn right_align(table: &mut Table, index: usize) {
    if let Some(col) = table.column_mut(index) {
        col.set_cell_alignment(CellAlignment::Right);
    }
}

/// Print a table line by line, trimming trailing padding and applying `indent`.
pub fn print_table(table: &Table, indent: &str) {
    for line in table.to_string().lines() {
        let trimmed = line.trim_end();
        if indent.is_empty() {
            println!("{trimmed}");
        } else {
            println!("{indent}{trimmed}");
        }
    }
}
