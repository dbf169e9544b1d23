//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a `Document` as a stable, indented outline for
//!   `insta` snapshot assertions (also the CLI's `outline` format)
//! - **`invariants`**: Runtime checks for parser correctness (heading levels,
//!   merged text runs, padded table rows)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned down by outline snapshots and invariant checks
//! rather than a separate formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as check_invariants;
pub use normalize::outline;
