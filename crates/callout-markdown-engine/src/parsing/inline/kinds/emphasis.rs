use crate::parsing::inline::{Inline, cursor::Cursor};

/// The paired-delimiter spans, in descending priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Strikethrough,
    Bold,
    Italic,
}

impl Emphasis {
    /// Every kind, in the order delimiters are tried.
    pub const ALL: [Emphasis; 3] = [Emphasis::Strikethrough, Emphasis::Bold, Emphasis::Italic];

    /// The delimiter string that both opens and closes this span.
    pub fn delimiter(self) -> &'static str {
        match self {
            Emphasis::Strikethrough => "~~",
            Emphasis::Bold => "**",
            Emphasis::Italic => "_",
        }
    }

    /// Detects which emphasis delimiter, if any, starts at the cursor.
    pub fn at(cur: &Cursor<'_>) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| cur.starts_with(kind.delimiter().as_bytes()))
    }

    /// Wraps parsed children in the matching inline node.
    pub fn wrap(self, children: Vec<Inline>) -> Inline {
        match self {
            Emphasis::Strikethrough => Inline::Strikethrough(children),
            Emphasis::Bold => Inline::Bold(children),
            Emphasis::Italic => Inline::Italic(children),
        }
    }

    /// Whether the delimiter at the cursor may open a span.
    ///
    /// Underscores inside words (`snake_case`) never open, and an `_` must be
    /// followed by non-whitespace. Such an `_` is ordinary text rather than an
    /// unmatched opener. `**` and `~~` always try to open, so one at the end
    /// of the text is reported like any other opener without a closer.
    pub fn can_open(self, cur: &Cursor<'_>) -> bool {
        match self {
            Emphasis::Italic => {
                !cur.prev_char().is_some_and(char::is_alphanumeric)
                    && cur.char_after(1).is_some_and(|c| !c.is_whitespace())
            }
            Emphasis::Bold | Emphasis::Strikethrough => true,
        }
    }

    /// Whether the delimiter starting at byte `at` may close a span.
    pub fn can_close(self, s: &str, at: usize) -> bool {
        match self {
            Emphasis::Italic => {
                let before = s.get(..at).and_then(|p| p.chars().next_back());
                let after = s.get(at + 1..).and_then(|r| r.chars().next());
                before.is_some_and(|c| !c.is_whitespace())
                    && !after.is_some_and(char::is_alphanumeric)
            }
            Emphasis::Bold | Emphasis::Strikethrough => true,
        }
    }
}
