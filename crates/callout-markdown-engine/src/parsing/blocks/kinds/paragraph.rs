/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block opener matches. Inline parsing is applied to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Joins source lines into a single line of paragraph text.
    pub fn join<S: AsRef<str>>(lines: &[S]) -> String {
        lines
            .iter()
            .map(|l| l.as_ref().trim())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
