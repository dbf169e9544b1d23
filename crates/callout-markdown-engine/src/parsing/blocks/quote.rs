//! Blockquote Builder.

use super::{kinds::BlockQuote, segmenter::segment, types::Block};
use crate::parsing::diagnostics::Diagnostics;

/// Builds a [`Block::Blockquote`] from contiguous `>`-prefixed lines.
///
/// One `>` and at most one following space are stripped per line; a bare `>`
/// is kept as an internal blank line. The interior is parsed again as a whole
/// document, so quotes may hold headings, lists, tables, code and quotes.
pub fn build<S: AsRef<str>>(lines: &[S]) -> Block {
    build_with(lines, &mut Diagnostics::default(), 0)
}

/// `depth` is the nesting level of the quote itself; its interior is one deeper.
pub(crate) fn build_with<S: AsRef<str>>(
    lines: &[S],
    diag: &mut Diagnostics,
    depth: usize,
) -> Block {
    let interior = lines
        .iter()
        .map(|l| BlockQuote::strip_prefix(l.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");
    Block::Blockquote {
        blocks: segment(&interior, diag, depth + 1),
    }
}
