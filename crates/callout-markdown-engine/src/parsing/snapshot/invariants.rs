use crate::parsing::{
    Document,
    blocks::{Block, kinds::Heading},
    inline::Inline,
};

/// Validates structural invariants of a parsed document.
///
/// Asserts that:
/// - Heading levels are within 1..=6
/// - Inline sequences never hold two adjacent `Text` nodes
/// - Lists have at least one item, ordered lists carry a start number
/// - Tables have at least one header cell and an alignment per header
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for block in &doc.blocks {
        check_block(block);
    }
}

fn check_block(block: &Block) {
    match block {
        Block::Paragraph { inline } | Block::Callout { inline, .. } => check_inlines(inline),
        Block::Heading { level, inline } => {
            assert!(
                (1..=Heading::MAX_LEVEL as u8).contains(level),
                "heading level out of range: {level}"
            );
            check_inlines(inline);
        }
        Block::List(list) => {
            assert!(!list.items.is_empty(), "list without items: {list:?}");
            assert_eq!(
                list.ordered,
                list.start.is_some(),
                "ordered lists must carry a start number: {list:?}"
            );
            for block in list.items.iter().flat_map(|item| &item.blocks) {
                check_block(block);
            }
        }
        Block::Blockquote { blocks } => {
            for block in blocks {
                check_block(block);
            }
        }
        Block::CodeBlock { .. } | Block::HorizontalRule => {}
        Block::Table(table) => {
            assert!(!table.headers.is_empty(), "table without headers");
            assert!(
                table.alignment.len() >= table.headers.len(),
                "missing alignment: {} for {} headers",
                table.alignment.len(),
                table.headers.len()
            );
            for row in &table.rows {
                assert!(
                    row.len() >= table.headers.len(),
                    "short table row was not padded: {row:?}"
                );
            }
            for cell in table.headers.iter().chain(table.rows.iter().flatten()) {
                check_inlines(cell);
            }
        }
    }
}

fn check_inlines(nodes: &[Inline]) {
    for pair in nodes.windows(2) {
        assert!(
            !matches!(pair, [Inline::Text(_), Inline::Text(_)]),
            "adjacent text nodes: {pair:?}"
        );
    }
    for node in nodes {
        match node {
            Inline::Text(_) | Inline::Code(_) => {}
            Inline::Bold(children)
            | Inline::Italic(children)
            | Inline::Strikethrough(children)
            | Inline::Link { children, .. } => check_inlines(children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;

    #[test]
    fn parsed_documents_hold_invariants() {
        check(&parse_document(
            "# T\n\n- a\n  1. b\n\n> | x |\n> |---|\n> | y | z |\n\n*Memory*: **m**",
        ));
    }

    #[test]
    #[should_panic(expected = "adjacent text nodes")]
    fn detects_adjacent_text() {
        check(&Document {
            blocks: vec![Block::Paragraph {
                inline: vec![Inline::text("a"), Inline::text("b")],
            }],
        });
    }

    #[test]
    #[should_panic(expected = "heading level out of range")]
    fn detects_bad_heading_level() {
        check(&Document {
            blocks: vec![Block::Heading {
                level: 7,
                inline: vec![],
            }],
        });
    }
}
