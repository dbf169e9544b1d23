use std::collections::HashMap;

use super::{
    cursor::run_len,
    kinds::{CodeSpan, Emphasis, Link},
};

/// Closer positions for one inline string, computed in a single pass.
///
/// Looking closers up here instead of scanning forward from every opener
/// keeps a line full of unmatched `[`, `_` or backticks linear. Delimiters
/// inside complete code spans are neither paired nor used as closers.
#[derive(Debug, Default)]
pub struct DelimiterIndex {
    code_spans: HashMap<usize, usize>,
    brackets: HashMap<usize, usize>,
    parens: HashMap<usize, usize>,
    /// Ascending positions of valid emphasis closers, one list per kind.
    closers: [Vec<usize>; 3],
}

impl DelimiterIndex {
    pub fn new(s: &str) -> Self {
        let b = s.as_bytes();
        let code_spans = CodeSpan::spans(s);
        let mut brackets = HashMap::new();
        let mut parens = HashMap::new();
        let mut open_brackets = vec![];
        let mut open_parens = vec![];
        let mut closers: [Vec<usize>; 3] = Default::default();

        let mut i = 0;
        while i < b.len() {
            match b[i] {
                CodeSpan::TICK => {
                    i = code_spans
                        .get(&i)
                        .copied()
                        .unwrap_or_else(|| i + run_len(b, i, CodeSpan::TICK));
                    continue;
                }
                Link::OPEN => open_brackets.push(i),
                Link::CLOSE => {
                    if let Some(open) = open_brackets.pop() {
                        brackets.insert(open, i);
                    }
                }
                Link::HREF_OPEN => open_parens.push(i),
                Link::HREF_CLOSE => {
                    if let Some(open) = open_parens.pop() {
                        parens.insert(open, i);
                    }
                }
                _ => {
                    for kind in Emphasis::ALL {
                        if b[i..].starts_with(kind.delimiter().as_bytes())
                            && kind.can_close(s, i)
                        {
                            closers[kind as usize].push(i);
                        }
                    }
                }
            }
            i += 1;
        }

        Self {
            code_spans,
            brackets,
            parens,
            closers,
        }
    }

    /// End (exclusive) of the complete code span whose opening run starts at `at`.
    pub fn code_span_end(&self, at: usize) -> Option<usize> {
        self.code_spans.get(&at).copied()
    }

    /// The `]` balancing the `[` at `open`.
    pub fn bracket_close(&self, open: usize) -> Option<usize> {
        self.brackets.get(&open).copied()
    }

    /// The `)` balancing the `(` at `open`.
    pub fn paren_close(&self, open: usize) -> Option<usize> {
        self.parens.get(&open).copied()
    }

    /// The first `kind` closer strictly after `inner_start`, so the span it
    /// closes is never empty.
    pub fn emphasis_close(&self, kind: Emphasis, inner_start: usize) -> Option<usize> {
        let closers = &self.closers[kind as usize];
        let at = closers.partition_point(|&c| c <= inner_start);
        closers.get(at).copied()
    }
}
