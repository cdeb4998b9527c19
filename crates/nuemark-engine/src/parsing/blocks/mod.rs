//! # Block Parsing
//!
//! Two-phase block parsing over a slice of source lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from the line itself plus one line of look-ahead
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` walks the lines,
//!    groups paragraphs, and recursively parses container bodies
//!
//! ## Modules
//!
//! - **`types`**: The block tree (`Block`, `BlockKind` and the per-kind structs)
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` constructs the tree and collects reflinks
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded (lists in quotes in tags, etc.)
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A `Newline` block never starts or ends a sequence and never repeats

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use types::{Block, BlockKind, CodeBlock, CodeData, Heading, List, Table, TagBlock};
