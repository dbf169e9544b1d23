//! # Block Parsing
//!
//! Recursive-descent block parsing over line slices.
//!
//! ## Parsing Flow
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (fence, heading, rule, quote, marker)
//!
//! 2. **Segmentation** (`segmenter`): the segmenter walks the lines, picks
//!    the span each opener claims and hands it to a builder
//!
//! 3. **Builders** (`list`, `quote`, `table`, `callout`): build one block
//!    kind; list and quote builders dedent their interior and call the
//!    segmenter again
//!
//! ## Modules
//!
//! - **`types`**: Tree types (`Block`, `List`, `ListItem`, `Table`, `Alignment`, `CalloutKind`)
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `classify()` produces a `LineClass` for each line
//! - **`segmenter`**: `segment()` orchestrates the builders
//! - **`list`** / **`quote`**: List Builder and Blockquote Builder
//! - **`table`**: Table Validator
//! - **`callout`**: Callout Classifier
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded (lists in blockquotes in lists, etc.)
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Every builder is total; malformed input degrades to paragraphs

pub mod callout;
pub mod classify;
pub mod kinds;
pub mod list;
pub mod quote;
pub mod segmenter;
pub mod table;
pub mod types;

pub use classify::{LineClass, classify};
pub(crate) use segmenter::segment;
pub use types::{Alignment, Block, CalloutKind, List, ListItem, Table};
