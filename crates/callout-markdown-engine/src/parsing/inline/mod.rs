//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (paragraphs, headings, callouts, table cells) after
//! the block structure is fixed. It knows nothing about blocks.
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum (Text, Bold, Italic, Strikethrough, Code, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Link, Emphasis)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`index`**: `DelimiterIndex`, closer positions computed once per string
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `**not bold**` `` parses as a single Code
//! node, and a `**` inside backticks never closes a bold span opened outside.

pub mod cursor;
pub mod index;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub(crate) use parser::parse_inline_with;
pub use types::{Inline, visible_text};
