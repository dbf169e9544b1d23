use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::lines::indent_of;

/// Bullet (`-`, `*`, `+`) versus numbered (`1.`) markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    Bullet,
    Ordered,
}

/// A list item marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker<'a> {
    pub style: MarkerStyle,
    /// Parsed number for ordered markers.
    pub number: Option<u64>,
    /// Indentation column of the marker.
    pub indent: usize,
    /// Column where the item's text starts; continuation lines are dedented by this.
    pub content_col: usize,
    /// Text after the marker on the same line.
    pub content: &'a str,
}

impl<'a> ListMarker<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = MARKER_REGEX.get_or_init(|| {
            Regex::new(r"^([ \t]*)([-*+]|(\d{1,9})\.)(?:([ \t]+)(.*))?$")
                .expect("Invalid list marker regex")
        });
        let caps = re.captures(line)?;

        let indent = indent_of(line);
        let marker_len = caps.get(2).map_or(0, |m| m.len());
        let number = caps.get(3).and_then(|n| n.as_str().parse().ok());
        let gap = caps.get(4).map_or(1, |g| g.len());
        let content = caps.get(5).map_or("", |c| c.as_str());

        Some(Self {
            style: if caps.get(3).is_some() {
                MarkerStyle::Ordered
            } else {
                MarkerStyle::Bullet
            },
            number,
            indent,
            content_col: indent + marker_len + gap,
            content,
        })
    }
}
