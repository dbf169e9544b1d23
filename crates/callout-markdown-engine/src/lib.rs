pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    Document, ParseReport,
    blocks::{Alignment, Block, CalloutKind, List, ListItem, Table},
    diagnostics::Degradation,
    inline::{Inline, parse_inline},
    parse_document, parse_with_report,
};
