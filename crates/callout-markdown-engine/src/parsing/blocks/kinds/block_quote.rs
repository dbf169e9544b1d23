/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// segmenter code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns true if the line (after indentation) starts with `>`.
    pub fn is_quote_line(line: &str) -> bool {
        line.trim_start().starts_with(Self::PREFIX)
    }

    /// Strips one `>` and at most one following space.
    ///
    /// Deeper quotes keep their remaining `>` and are handled when the
    /// interior is parsed again. A bare `>` becomes an empty line.
    pub fn strip_prefix(line: &str) -> &str {
        let trimmed = line.trim_start();
        match trimmed.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }
}
