//! Table Validator.

use super::{
    kinds::TableRow,
    types::{Alignment, Table},
};
use crate::parsing::{
    diagnostics::{Degradation, Diagnostics},
    inline::{Inline, parse_inline_with},
};

/// Validates a header line, separator line and body rows as a pipe table.
///
/// Every separator cell must match `:?-+:?`. Any violation returns `None`
/// and the caller renders the original lines as paragraphs. Short body rows
/// are padded with empty text cells up to the header width; long rows keep
/// their extra cells.
pub fn validate<S: AsRef<str>>(lines: &[S]) -> Option<Table> {
    validate_with(lines, &mut Diagnostics::default())
}

pub(crate) fn validate_with<S: AsRef<str>>(
    lines: &[S],
    diag: &mut Diagnostics,
) -> Option<Table> {
    let [header, separator, body @ ..] = lines else {
        return None;
    };
    let separator = separator.as_ref();

    let alignment = TableRow::split_cells(separator)
        .iter()
        .map(|cell| TableRow::alignment(cell))
        .collect::<Option<Vec<Alignment>>>();
    let Some(mut alignment) = alignment else {
        diag.record(Degradation::InvalidTableSeparator {
            separator: separator.trim().to_string(),
        });
        return None;
    };

    let headers = parse_cells(header.as_ref(), diag);
    if alignment.len() < headers.len() {
        alignment.resize(headers.len(), Alignment::None);
    }

    let rows = body
        .iter()
        .map(|line| {
            let mut cells = parse_cells(line.as_ref(), diag);
            while cells.len() < headers.len() {
                cells.push(vec![Inline::text("")]);
            }
            cells
        })
        .collect();

    Some(Table {
        headers,
        alignment,
        rows,
    })
}

fn parse_cells(line: &str, diag: &mut Diagnostics) -> Vec<Vec<Inline>> {
    TableRow::split_cells(line)
        .iter()
        .map(|cell| parse_inline_with(cell, diag))
        .collect()
}
