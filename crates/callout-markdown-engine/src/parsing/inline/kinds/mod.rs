//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Link`**: `[text](href)` bracket and paren delimiters
//! - **`Emphasis`**: `~~` strikethrough, `**` bold, `_` italic
//!
//! All delimiter constants live here, not scattered in parser code.
//! Pairing openers with closers is done by `index::DelimiterIndex`.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
