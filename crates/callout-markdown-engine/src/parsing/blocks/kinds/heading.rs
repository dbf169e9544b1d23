/// ATX heading: 1-6 `#` followed by whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the level and trimmed content of a heading line.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let t = line.trim_start();
        let level = t.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &t[level..];
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some((level as u8, rest.trim()))
    }
}
