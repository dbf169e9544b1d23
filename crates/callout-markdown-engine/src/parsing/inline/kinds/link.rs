/// Link inline type `[text](href)` with owned delimiter constants.
///
/// Bracket and parenthesis pairing lives in
/// [`DelimiterIndex`](crate::parsing::inline::index::DelimiterIndex).
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';
}
