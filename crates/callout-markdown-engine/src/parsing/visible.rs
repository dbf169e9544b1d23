//! Visible-text projection: what a reader sees once markup is consumed.

use super::{
    Document,
    blocks::Block,
    inline::{Inline, visible_text},
};

impl Document {
    /// Human-visible text, one line per leaf block, table row or list item
    /// paragraph. Callout labels are included; link targets are not.
    pub fn visible_text(&self) -> String {
        let mut out = vec![];
        for block in &self.blocks {
            push_block_text(block, &mut out);
        }
        out.join("\n")
    }
}

fn push_block_text(block: &Block, out: &mut Vec<String>) {
    match block {
        Block::Paragraph { inline } | Block::Heading { inline, .. } => {
            out.push(visible_text(inline));
        }
        Block::List(list) => {
            for block in list.items.iter().flat_map(|item| &item.blocks) {
                push_block_text(block, out);
            }
        }
        Block::Blockquote { blocks } => {
            for block in blocks {
                push_block_text(block, out);
            }
        }
        Block::CodeBlock { raw, .. } => out.push(raw.clone()),
        Block::Table(table) => {
            out.push(row_text(&table.headers));
            out.extend(table.rows.iter().map(|row| row_text(row)));
        }
        Block::HorizontalRule => {}
        Block::Callout { kind, inline } => {
            out.push(kind.label().to_string());
            out.push(visible_text(inline));
        }
    }
}

fn row_text(cells: &[Vec<Inline>]) -> String {
    cells
        .iter()
        .map(|cell| visible_text(cell))
        .collect::<Vec<_>>()
        .join("\t")
}
