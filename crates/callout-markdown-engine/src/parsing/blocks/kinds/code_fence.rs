use crate::parsing::lines::indent_of;

/// An opening fence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    /// Indentation column of the opening backticks.
    pub indent: usize,
    /// Info string after the backticks, if any.
    pub language: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Recognises an opening fence, returning its indent and language tag.
    ///
    /// A backtick in the info string means the line is inline code, not a
    /// fence (`` ```x``` ``).
    pub fn open(line: &str) -> Option<FenceOpen> {
        let t = line.trim_start();
        if !t.starts_with(Self::BACKTICKS) {
            return None;
        }
        let info = t.trim_start_matches('`').trim();
        if info.contains('`') {
            return None;
        }
        Some(FenceOpen {
            indent: indent_of(line),
            language: (!info.is_empty()).then(|| info.to_string()),
        })
    }

    /// Returns true if the line closes a fence: only three or more backticks.
    pub fn closes(line: &str) -> bool {
        let t = line.trim();
        t.starts_with(Self::BACKTICKS) && t.bytes().all(|b| b == b'`')
    }
}
