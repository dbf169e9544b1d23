use serde::Serialize;

use crate::parsing::inline::Inline;

/// A top-level structural unit of a [`Document`](crate::parsing::Document).
///
/// Closed set: every consumer matches exhaustively, so adding a kind forces
/// each match site to be revisited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    /// Default leaf block: consecutive non-blank lines joined with spaces.
    Paragraph { inline: Vec<Inline> },
    /// `#` to `######` followed by a space.
    Heading { level: u8, inline: Vec<Inline> },
    /// Bullet or numbered list.
    List(List),
    /// `>`-prefixed lines, re-parsed as blocks.
    Blockquote { blocks: Vec<Block> },
    /// Fenced code. `raw` is verbatim and never re-parsed.
    CodeBlock {
        language: Option<String>,
        raw: String,
    },
    /// Pipe table with a validated separator row.
    Table(Table),
    /// A line of three or more `-`.
    HorizontalRule,
    /// A paragraph that started with a reserved label.
    Callout {
        kind: CalloutKind,
        inline: Vec<Inline>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub ordered: bool,
    /// The first marker's number for ordered lists; `None` for bullets.
    pub start: Option<u64>,
    pub items: Vec<ListItem>,
}

impl List {
    /// The number a renderer shows for the item at `index`.
    ///
    /// Source numbering is ignored after the first marker: items are always
    /// renumbered sequentially from `start`.
    pub fn item_number(&self, index: usize) -> Option<u64> {
        self.start.map(|start| start + index as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<Vec<Inline>>,
    pub alignment: Vec<Alignment>,
    /// Rows may be longer than `headers`; short rows are padded.
    pub rows: Vec<Vec<Vec<Inline>>>,
}

impl Table {
    /// Widest of the header row and every body row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    /// Alignment for a column, `None` past the separator row's width.
    pub fn alignment_of(&self, column: usize) -> Alignment {
        self.alignment.get(column).copied().unwrap_or(Alignment::None)
    }
}

/// The two reserved callout labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalloutKind {
    Memory,
    Goal,
}

impl CalloutKind {
    pub const ALL: [CalloutKind; 2] = [CalloutKind::Memory, CalloutKind::Goal];

    /// The label shown next to the callout body.
    pub fn label(self) -> &'static str {
        match self {
            CalloutKind::Memory => "Memory",
            CalloutKind::Goal => "Next Goal",
        }
    }

    /// The literal source prefix that selects this callout.
    pub fn marker(self) -> &'static str {
        match self {
            CalloutKind::Memory => "*Memory*:",
            CalloutKind::Goal => "*Next Goal*:",
        }
    }
}
