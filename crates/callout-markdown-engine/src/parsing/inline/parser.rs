use crate::parsing::{
    MAX_NESTING,
    diagnostics::{Degradation, Diagnostics},
};

use super::{
    cursor::Cursor,
    index::DelimiterIndex,
    kinds::{CodeSpan, Emphasis, Link},
    types::Inline,
};

/// Parses a line of text into a sequence of [`Inline`] nodes.
///
/// # Precedence
/// A single left-to-right scan. Code spans are raw zones and win over
/// everything; then links, strikethrough, bold and italic. A delimiter only
/// opens a span if its closer exists later in `s`. Spans are fixed
/// outermost-first: the inner text of a bold/italic/strikethrough/link span is
/// parsed again on its own, so a delimiter whose closer lies outside the span
/// stays literal inside it.
///
/// Spans nested deeper than [`MAX_NESTING`] keep their inner text literal.
///
/// # Returns
/// Nodes covering the entire input. Unmatched delimiters are kept as `Text`.
pub fn parse_inline(s: &str) -> Vec<Inline> {
    parse_inline_with(s, &mut Diagnostics::default())
}

pub(crate) fn parse_inline_with(s: &str, diag: &mut Diagnostics) -> Vec<Inline> {
    parse_nested(s, diag, 0)
}

/// Parses `s` as the inner text of a span nested `depth` levels deep.
///
/// At [`MAX_NESTING`] the text is kept literal and not scanned further.
fn parse_nested(s: &str, diag: &mut Diagnostics, depth: usize) -> Vec<Inline> {
    if depth >= MAX_NESTING {
        if s.is_empty() {
            return vec![];
        }
        diag.record(Degradation::NestingTooDeep { limit: MAX_NESTING });
        return vec![Inline::text(s)];
    }

    let index = DelimiterIndex::new(s);
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        let node = match cur.peek() {
            Some(CodeSpan::TICK) => try_parse_code_span(&mut cur, &index, diag),
            Some(Link::OPEN) => try_parse_link(&mut cur, &index, diag, depth),
            _ => match Emphasis::at(&cur) {
                Some(kind) => try_parse_emphasis(&mut cur, kind, &index, diag, depth),
                None => None,
            },
        };
        match node {
            Some(node) => {
                flush_text(&mut out, &s[text_start..start]);
                out.push(node);
                text_start = cur.pos();
            }
            // Failed openers advance past their own literal delimiter.
            None if cur.pos() == start => {
                cur.bump();
            }
            None => {}
        }
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

/// Appends literal text, merging with a preceding `Text` node.
fn flush_text(out: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(Inline::text(text));
    }
}

/// Attempts to parse a code span starting at the current position.
///
/// The closer must be a run of the same number of backticks. On failure the
/// whole opening run is skipped as literal text.
fn try_parse_code_span(
    cur: &mut Cursor<'_>,
    index: &DelimiterIndex,
    diag: &mut Diagnostics,
) -> Option<Inline> {
    let run = cur.run_len(CodeSpan::TICK);
    let inner_start = cur.pos() + run;

    let Some(end) = index.code_span_end(cur.pos()) else {
        diag.record(Degradation::UnmatchedDelimiter {
            delimiter: "`".repeat(run),
        });
        cur.bump_n(run);
        return None;
    };

    let value = cur.s[inner_start..end - run].to_string();
    cur.jump_to(end);
    Some(Inline::Code(value))
}

/// Attempts to parse `[text](href)` starting at the current position.
fn try_parse_link(
    cur: &mut Cursor<'_>,
    index: &DelimiterIndex,
    diag: &mut Diagnostics,
    depth: usize,
) -> Option<Inline> {
    let text_start = cur.pos() + 1;

    let Some(text_end) = index.bracket_close(cur.pos()) else {
        diag.record(Degradation::UnmatchedDelimiter {
            delimiter: "[".into(),
        });
        return None;
    };

    // `[x]` without a following `(...)` is plain text, not a broken link.
    if cur.s.as_bytes().get(text_end + 1) != Some(&Link::HREF_OPEN) {
        return None;
    }
    let href_start = text_end + 2;
    let Some(href_end) = index.paren_close(text_end + 1) else {
        diag.record(Degradation::UnmatchedDelimiter {
            delimiter: "(".into(),
        });
        return None;
    };

    let children = parse_nested(&cur.s[text_start..text_end], diag, depth + 1);
    let href = cur.s[href_start..href_end].trim().to_string();
    cur.jump_to(href_end + 1);
    Some(Inline::Link { children, href })
}

/// Attempts to parse a strikethrough, bold or italic span.
///
/// The inner text must be non-empty. On failure the opening delimiter is
/// skipped as literal text.
fn try_parse_emphasis(
    cur: &mut Cursor<'_>,
    kind: Emphasis,
    index: &DelimiterIndex,
    diag: &mut Diagnostics,
    depth: usize,
) -> Option<Inline> {
    if !kind.can_open(cur) {
        return None;
    }
    let delim = kind.delimiter();
    let inner_start = cur.pos() + delim.len();

    let Some(close) = index.emphasis_close(kind, inner_start) else {
        diag.record(Degradation::UnmatchedDelimiter {
            delimiter: delim.into(),
        });
        cur.bump_n(delim.len());
        return None;
    };

    let children = parse_nested(&cur.s[inner_start..close], diag, depth + 1);
    cur.jump_to(close + delim.len());
    Some(kind.wrap(children))
}
