//! Line splitting and indentation helpers shared by the block builders.
//!
//! All indentation is measured in columns, not bytes, so that a tab lines up
//! the same way an editor would display it.

/// Column width a tab advances to when measuring indentation.
pub const TAB_WIDTH: usize = 4;

/// Splits text into lines, accepting both `\n` and `\r\n` endings.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Returns true if the line is empty or whitespace only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Returns the column of the first non-whitespace character.
pub fn indent_of(line: &str) -> usize {
    let mut col = 0;
    for b in line.bytes() {
        match b {
            b' ' => col += 1,
            b'\t' => col += TAB_WIDTH - col % TAB_WIDTH,
            _ => break,
        }
    }
    col
}

/// Removes up to `cols` columns of leading whitespace.
///
/// Lines indented less than `cols` lose all of their leading whitespace;
/// content is never removed.
pub fn strip_indent(line: &str, cols: usize) -> &str {
    let mut col = 0;
    let mut idx = 0;
    for b in line.bytes() {
        if col >= cols {
            break;
        }
        match b {
            b' ' => col += 1,
            b'\t' => col += TAB_WIDTH - col % TAB_WIDTH,
            _ => break,
        }
        idx += 1;
    }
    &line[idx..]
}
