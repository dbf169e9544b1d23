/// Horizontal rule: a line of three or more `-` and nothing else.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHAR: char = '-';
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::MIN_LEN && t.chars().all(|c| c == Self::CHAR)
    }
}
