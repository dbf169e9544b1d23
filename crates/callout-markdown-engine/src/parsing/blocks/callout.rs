//! Callout Classifier.

use super::types::{Block, CalloutKind};
use crate::parsing::{diagnostics::Diagnostics, inline::parse_inline_with};

/// Reclassifies paragraph source text that starts with a reserved label.
///
/// The check runs on the raw source before any inline parsing, so the
/// asterisks around `*Memory*` and `*Next Goal*` are never read as emphasis.
/// Matching is case-sensitive. Returns `None` for ordinary paragraphs.
pub fn classify(source: &str) -> Option<Block> {
    classify_with(source, &mut Diagnostics::default())
}

pub(crate) fn classify_with(source: &str, diag: &mut Diagnostics) -> Option<Block> {
    let (kind, body) = CalloutKind::ALL
        .into_iter()
        .find_map(|kind| source.strip_prefix(kind.marker()).map(|rest| (kind, rest)))?;
    log::trace!("paragraph reclassified as {} callout", kind.label());
    Some(Block::Callout {
        kind,
        inline: parse_inline_with(body.trim_start(), diag),
    })
}
