//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The segmenter and
//! builders ask these types; they never hardcode `>`, ` ``` ` or `|`.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_marker;
pub mod paragraph;
pub mod table_row;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceOpen};
pub use heading::Heading;
pub use list_marker::{ListMarker, MarkerStyle};
pub use paragraph::Paragraph;
pub use table_row::TableRow;
pub use thematic_break::ThematicBreak;
