//! Block Segmenter.
//!
//! Splits text into block spans and dispatches each span to the matching
//! builder. The builders call back into [`segment`] for interior content, so
//! this is the single reentrant entry point for every nesting level.

use super::{
    callout,
    classify::{LineClass, classify, opens_table},
    kinds::{BlockQuote, CodeFence, FenceOpen, Paragraph, TableRow},
    list, quote, table,
    types::Block,
};
use crate::parsing::{
    MAX_NESTING,
    diagnostics::{Degradation, Diagnostics},
    inline::{Inline, parse_inline_with},
    lines::{is_blank, split_lines, strip_indent},
};

/// Parses text into blocks, recording any degradations in `diag`.
///
/// `depth` counts the containers enclosing `text`. At [`MAX_NESTING`] the
/// text is no longer segmented and becomes one literal paragraph.
pub(crate) fn segment(text: &str, diag: &mut Diagnostics, depth: usize) -> Vec<Block> {
    let lines = split_lines(text);
    if depth >= MAX_NESTING {
        return literal(&lines, diag);
    }
    let mut segmenter = BlockSegmenter::new(&lines, diag, depth);
    segmenter.run();
    segmenter.finish()
}

fn literal(lines: &[&str], diag: &mut Diagnostics) -> Vec<Block> {
    let literal = lines.join("\n").trim().to_string();
    if literal.is_empty() {
        return vec![];
    }
    diag.record(Degradation::NestingTooDeep { limit: MAX_NESTING });
    vec![Block::Paragraph {
        inline: vec![Inline::Text(literal)],
    }]
}

struct BlockSegmenter<'a, 'd> {
    lines: &'a [&'a str],
    pos: usize,
    depth: usize,
    out: Vec<Block>,
    diag: &'d mut Diagnostics,
}

impl<'a, 'd> BlockSegmenter<'a, 'd> {
    fn new(lines: &'a [&'a str], diag: &'d mut Diagnostics, depth: usize) -> Self {
        Self {
            lines,
            pos: 0,
            depth,
            out: vec![],
            diag,
        }
    }

    fn run(&mut self) {
        while self.pos < self.lines.len() {
            self.push_next();
        }
    }

    fn finish(self) -> Vec<Block> {
        self.out
    }

    /// Consumes at least one line starting at `pos`.
    fn push_next(&mut self) {
        let class = classify(self.lines[self.pos]);
        log::trace!("line {}: {:?}", self.pos, class);

        match class {
            LineClass::Blank => self.pos += 1,
            LineClass::FenceOpen(open) => self.fenced_code(open),
            LineClass::Heading { level, content } => {
                let inline = parse_inline_with(content, self.diag);
                self.emit(Block::Heading { level, inline }, 1);
            }
            LineClass::ThematicBreak => self.emit(Block::HorizontalRule, 1),
            LineClass::Quote => self.block_quote(),
            LineClass::ListItem(_) => self.list(),
            LineClass::Text if opens_table(self.lines, self.pos) => self.table(),
            LineClass::Text => self.paragraph(),
        }
    }

    fn emit(&mut self, block: Block, consumed: usize) {
        self.out.push(block);
        self.pos += consumed;
    }

    /// Fenced code, or the literal fallback when no closing fence exists.
    fn fenced_code(&mut self, open: FenceOpen) {
        let body_start = self.pos + 1;
        let close = self.lines[body_start..]
            .iter()
            .position(|l| CodeFence::closes(l))
            .map(|offset| body_start + offset);

        match close {
            Some(close) => {
                let raw = self.lines[body_start..close]
                    .iter()
                    .map(|l| strip_indent(l, open.indent))
                    .collect::<Vec<_>>()
                    .join("\n");
                let block = Block::CodeBlock {
                    language: open.language,
                    raw,
                };
                self.emit(block, close + 1 - self.pos);
            }
            None => {
                // The unclosed fence claims the rest of the text, markers included.
                let literal = self.lines[self.pos..].join("\n").trim_end().to_string();
                self.diag.record(Degradation::UnterminatedFence {
                    language: open.language,
                });
                let consumed = self.lines.len() - self.pos;
                self.emit(
                    Block::Paragraph {
                        inline: vec![Inline::Text(literal)],
                    },
                    consumed,
                );
            }
        }
    }

    fn block_quote(&mut self) {
        let end = self.span_end(|l| BlockQuote::is_quote_line(l));
        let block = quote::build_with(&self.lines[self.pos..end], self.diag, self.depth);
        self.emit(block, end - self.pos);
    }

    fn list(&mut self) {
        let end = list::span_end(self.lines, self.pos);
        for built in list::build_with(&self.lines[self.pos..end], self.diag, self.depth) {
            self.out.push(Block::List(built));
        }
        self.pos = end;
    }

    /// Table candidate: validated, or re-read as a paragraph on failure.
    fn table(&mut self) {
        let body_start = self.pos + 2;
        let end = self.lines[body_start..]
            .iter()
            .position(|l| is_blank(l) || !TableRow::has_pipe(l))
            .map_or(self.lines.len(), |offset| body_start + offset);

        match table::validate_with(&self.lines[self.pos..end], self.diag) {
            Some(built) => self.emit(Block::Table(built), end - self.pos),
            None => self.paragraph(),
        }
    }

    /// Default: contiguous plain lines joined into one paragraph, then
    /// offered to the callout classifier.
    fn paragraph(&mut self) {
        let start = self.pos;
        let mut end = start + 1;
        while end < self.lines.len() && self.continues_paragraph(end) {
            end += 1;
        }

        let source = Paragraph::join(&self.lines[start..end]);
        let block = match callout::classify_with(&source, self.diag) {
            Some(callout) => callout,
            None => Block::Paragraph {
                inline: parse_inline_with(&source, self.diag),
            },
        };
        self.emit(block, end - start);
    }

    fn continues_paragraph(&self, at: usize) -> bool {
        classify(self.lines[at]) == LineClass::Text && !opens_table(self.lines, at)
    }

    /// End (exclusive) of the run of lines from `pos` matching `pred`.
    fn span_end(&self, pred: impl Fn(&str) -> bool) -> usize {
        self.lines[self.pos..]
            .iter()
            .position(|l| !pred(l))
            .map_or(self.lines.len(), |offset| self.pos + offset)
    }
}
