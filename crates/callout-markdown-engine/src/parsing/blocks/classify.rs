use super::kinds::{
    BlockQuote, CodeFence, FenceOpen, Heading, ListMarker, TableRow, ThematicBreak,
};
use crate::parsing::lines::is_blank;

/// Classification of a single line containing only local facts.
///
/// Openers are checked in priority order: fence, heading, horizontal rule,
/// blockquote, list marker. Table candidates need the following line and are
/// detected by [`opens_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    FenceOpen(FenceOpen),
    Heading { level: u8, content: &'a str },
    ThematicBreak,
    Quote,
    ListItem(ListMarker<'a>),
    Text,
}

/// Classifies a line into a [`LineClass`].
pub fn classify(line: &str) -> LineClass<'_> {
    if is_blank(line) {
        return LineClass::Blank;
    }
    if let Some(open) = CodeFence::open(line) {
        return LineClass::FenceOpen(open);
    }
    if let Some((level, content)) = Heading::parse(line) {
        return LineClass::Heading { level, content };
    }
    if ThematicBreak::matches(line) {
        return LineClass::ThematicBreak;
    }
    if BlockQuote::is_quote_line(line) {
        return LineClass::Quote;
    }
    if let Some(marker) = ListMarker::parse(line) {
        return LineClass::ListItem(marker);
    }
    LineClass::Text
}

/// Returns true if `lines[at]` contains a pipe and the next line has the
/// shape of a separator row.
pub fn opens_table(lines: &[&str], at: usize) -> bool {
    match (lines.get(at), lines.get(at + 1)) {
        (Some(header), Some(separator)) => {
            TableRow::has_pipe(header) && TableRow::looks_like_separator(separator)
        }
        _ => false,
    }
}
