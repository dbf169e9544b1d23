pub mod blocks;
pub mod diagnostics;
pub mod inline;
pub mod lines;
pub mod snapshot;
mod visible;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::{Block, segment};
use diagnostics::{Degradation, Diagnostics};

/// Deepest container or inline span nesting that is parsed structurally.
///
/// Quotes, list items, links and emphasis spans nested deeper than this keep
/// their remaining source as literal text, which bounds recursion on
/// adversarial input such as a line of thousands of `>`.
pub const MAX_NESTING: usize = 128;

/// The parsed form of one input string.
///
/// Built fresh per call, bottom-up and without back-references; nothing is
/// shared between documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A document together with the degradations applied while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub document: Document,
    pub degradations: Vec<Degradation>,
}

/// Parses text into a [`Document`].
///
/// Pure and total: never fails, never panics on malformed input, and holds
/// no state between calls. Empty or whitespace-only text yields an empty
/// document.
pub fn parse_document(text: &str) -> Document {
    parse_with_report(text).document
}

/// Like [`parse_document`], also returning every fallback that was applied.
pub fn parse_with_report(text: &str) -> ParseReport {
    let mut diag = Diagnostics::default();
    if text.trim().is_empty() {
        diag.record(Degradation::EmptyInput);
    }
    let blocks = segment(text, &mut diag, 0);
    ParseReport {
        document: Document { blocks },
        degradations: diag.into_degradations(),
    }
}
