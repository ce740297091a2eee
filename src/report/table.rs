//! GitHub-flavoured Markdown tables.

use thiserror::Error;

/// A table that cannot be rendered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("row {row} has {found} columns, header has {expected}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Renders a pipe-delimited table: header row, divider row, then data rows.
///
/// Lines are joined with `\n` and there is no trailing newline. Every row
/// must have as many cells as the header; otherwise nothing is rendered.
/// Pipes inside cells are escaped.
pub fn render_table<H, R, C>(header: &[H], rows: &[R]) -> Result<String, TableError>
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let expected = header.len();
    if let Some((row, found)) = rows
        .iter()
        .map(|r| r.as_ref().len())
        .enumerate()
        .find(|(_, len)| *len != expected)
    {
        return Err(TableError::ColumnMismatch {
            row,
            expected,
            found,
        });
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(header.iter().map(|h| h.as_ref())));
    lines.push(render_row(std::iter::repeat_n("---", expected)));
    for row in rows {
        lines.push(render_row(row.as_ref().iter().map(|c| c.as_ref())));
    }

    Ok(lines.join("\n"))
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<String> = cells.map(|c| c.replace('|', "\\|")).collect();
    format!("| {} |", cells.join(" | "))
}
