//! Block-specific types that own their syntax delimiters.
//!
//! The classifier and builder call into these; they never hardcode markers.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;
pub mod tag;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceInfo, FenceKind, FenceSig};
pub use heading::HeadingSyntax;
pub use list::{ListItem, ListMarker};
pub use paragraph::Paragraph;
pub use table::TableSyntax;
pub use tag::{TagHeader, TagSyntax};
pub use thematic_break::ThematicBreak;
