use std::collections::HashMap;

use crate::parsing::inline::cursor::run_len;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - no other inline parsing occurs inside them,
/// and delimiters inside them never close a span opened outside.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Pairs each backtick run with the next run of exactly the same length.
    ///
    /// Returns a map from the byte index of an opening run to the index just
    /// past its closing run. Runs with no later partner are absent.
    pub fn spans(s: &str) -> HashMap<usize, usize> {
        let b = s.as_bytes();
        let mut runs = vec![];
        let mut i = 0;
        while i < b.len() {
            if b[i] == Self::TICK {
                let n = run_len(b, i, Self::TICK);
                runs.push((i, n));
                i += n;
            } else {
                i += 1;
            }
        }

        let mut next_of_len = HashMap::new();
        let mut spans = HashMap::new();
        for &(start, len) in runs.iter().rev() {
            if let Some(&close) = next_of_len.get(&len) {
                spans.insert(start, close + len);
            }
            next_of_len.insert(len, start);
        }
        spans
    }
}
