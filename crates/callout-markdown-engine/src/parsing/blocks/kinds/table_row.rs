use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::Alignment;

/// Pipe-table row syntax: cell splitting and separator cells.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';
    const ESCAPE: char = '\\';

    /// Returns true if the line contains a pipe and so may be a table row.
    pub fn has_pipe(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// Loose separator shape used to spot a table candidate: pipes, colons,
    /// dashes and whitespace only, with at least one pipe and one dash.
    ///
    /// Strict per-cell validation happens in the table validator.
    pub fn looks_like_separator(line: &str) -> bool {
        let t = line.trim();
        t.contains(Self::PIPE)
            && t.contains('-')
            && t.chars()
                .all(|c| matches!(c, '|' | ':' | '-' | ' ' | '\t'))
    }

    /// Splits a row on unescaped pipes.
    ///
    /// A single leading and trailing pipe are optional. `\|` yields a literal
    /// pipe inside a cell. Cells are trimmed.
    pub fn split_cells(line: &str) -> Vec<String> {
        let mut t = line.trim();
        t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        if t.ends_with(Self::PIPE) && !t.ends_with("\\|") {
            t = &t[..t.len() - 1];
        }

        let mut cells = vec![];
        let mut cell = String::new();
        let mut chars = t.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                Self::ESCAPE if chars.peek() == Some(&Self::PIPE) => {
                    cell.push(Self::PIPE);
                    chars.next();
                }
                Self::PIPE => cells.push(std::mem::take(&mut cell)),
                _ => cell.push(c),
            }
        }
        cells.push(cell);
        cells.into_iter().map(|c| c.trim().to_string()).collect()
    }

    /// Parses one separator cell (`:?-+:?`) into its alignment.
    pub fn alignment(cell: &str) -> Option<Alignment> {
        static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = SEPARATOR_REGEX
            .get_or_init(|| Regex::new(r"^(:?)-+(:?)$").expect("Invalid separator regex"));
        let caps = re.captures(cell)?;
        let left = caps.get(1).is_some_and(|m| !m.is_empty());
        let right = caps.get(2).is_some_and(|m| !m.is_empty());
        Some(match (left, right) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        })
    }
}
