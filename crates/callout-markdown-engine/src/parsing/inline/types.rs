use serde::Serialize;

/// A formatted span within a block's text.
///
/// `Text` and `Code` hold their characters verbatim; the remaining variants
/// hold recursively parsed children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Inline {
    /// Literal text, including any delimiters that never found a closer.
    Text(String),
    /// `**...**`
    Bold(Vec<Inline>),
    /// `_..._`
    Italic(Vec<Inline>),
    /// `~~...~~`
    Strikethrough(Vec<Inline>),
    /// A backtick code span. This is a raw zone: its value is never re-parsed.
    Code(String),
    /// `[children](href)`.
    ///
    /// Renderers open links in a new context (new tab/window); that
    /// convention is not expressed in the source syntax.
    Link { children: Vec<Inline>, href: String },
}

impl Inline {
    /// Convenience constructor for a `Text` node.
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(value.into())
    }

    /// The characters a reader would see, with all markup consumed.
    pub fn visible_text(&self) -> String {
        match self {
            Inline::Text(value) | Inline::Code(value) => value.clone(),
            Inline::Bold(children)
            | Inline::Italic(children)
            | Inline::Strikethrough(children)
            | Inline::Link { children, .. } => visible_text(children),
        }
    }
}

/// Concatenated visible text of an inline sequence.
pub fn visible_text(nodes: &[Inline]) -> String {
    nodes.iter().map(Inline::visible_text).collect()
}
