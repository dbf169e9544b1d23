use std::fmt::Write;

use crate::parsing::{
    Document,
    blocks::{Block, Table},
    inline::Inline,
};

/// Renders a document as an indented outline for snapshot assertions.
///
/// One node per line, two spaces per nesting level, text values quoted with
/// `Debug` escaping so whitespace and newlines stay visible.
pub fn outline(doc: &Document) -> String {
    let mut out = Outline::default();
    for block in &doc.blocks {
        out.block(block, 0);
    }
    out.finish()
}

#[derive(Default)]
struct Outline {
    lines: Vec<String>,
}

impl Outline {
    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", "  ".repeat(depth), text.as_ref()));
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }

    fn block(&mut self, block: &Block, depth: usize) {
        match block {
            Block::Paragraph { inline } => {
                self.line(depth, "Paragraph");
                self.inlines(inline, depth + 1);
            }
            Block::Heading { level, inline } => {
                self.line(depth, format!("Heading({level})"));
                self.inlines(inline, depth + 1);
            }
            Block::List(list) => {
                let label = match list.start {
                    Some(start) if list.ordered => format!("List(ordered, start={start})"),
                    _ => "List(bullet)".to_string(),
                };
                self.line(depth, label);
                for item in &list.items {
                    self.line(depth + 1, "Item");
                    for block in &item.blocks {
                        self.block(block, depth + 2);
                    }
                }
            }
            Block::Blockquote { blocks } => {
                self.line(depth, "Blockquote");
                for block in blocks {
                    self.block(block, depth + 1);
                }
            }
            Block::CodeBlock { language, raw } => {
                match language {
                    Some(lang) => self.line(depth, format!("CodeBlock({lang})")),
                    None => self.line(depth, "CodeBlock"),
                }
                self.line(depth + 1, format!("{raw:?}"));
            }
            Block::Table(table) => self.table(table, depth),
            Block::HorizontalRule => self.line(depth, "HorizontalRule"),
            Block::Callout { kind, inline } => {
                self.line(depth, format!("Callout({})", kind.label()));
                self.inlines(inline, depth + 1);
            }
        }
    }

    fn table(&mut self, table: &Table, depth: usize) {
        let mut label = String::from("Table");
        for (i, align) in table.alignment.iter().enumerate() {
            let sep = if i == 0 { "(" } else { ", " };
            let _ = write!(label, "{sep}{align:?}");
        }
        if !table.alignment.is_empty() {
            label.push(')');
        }
        self.line(depth, label);
        self.row("Header", &table.headers, depth + 1);
        for row in &table.rows {
            self.row("Row", row, depth + 1);
        }
    }

    fn row(&mut self, label: &str, cells: &[Vec<Inline>], depth: usize) {
        self.line(depth, label);
        for cell in cells {
            self.line(depth + 1, "Cell");
            self.inlines(cell, depth + 2);
        }
    }

    fn inlines(&mut self, nodes: &[Inline], depth: usize) {
        for node in nodes {
            match node {
                Inline::Text(value) => self.line(depth, format!("Text {value:?}")),
                Inline::Code(value) => self.line(depth, format!("Code {value:?}")),
                Inline::Bold(children) => self.span("Bold", children, depth),
                Inline::Italic(children) => self.span("Italic", children, depth),
                Inline::Strikethrough(children) => self.span("Strikethrough", children, depth),
                Inline::Link { children, href } => {
                    self.span(&format!("Link {href:?}"), children, depth)
                }
            }
        }
    }

    fn span(&mut self, label: &str, children: &[Inline], depth: usize) {
        self.line(depth, label);
        self.inlines(children, depth + 1);
    }
}
