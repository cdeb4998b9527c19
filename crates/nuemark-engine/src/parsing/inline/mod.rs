//! # Inline Parsing
//!
//! Cursor-based inline tokenizer with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and operates on one logical
//! line at a time (paragraph lines, heading text, table cells).
//!
//! At each position the parser tries, in order: a backslash escape, a code
//! span, an image, a link or reference placeholder, then strong/emphasis.
//! Anything else accumulates as text.
//!
//! ## Modules
//!
//! - **`types`**: `Token` enum
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for character-by-character parsing
//! - **`parser`**: `tokenize()` main entry point with `try_parse_*` helpers
//!
//! ## Reference placeholders
//!
//! `[text][label]` and `[label]` are kept as `Token::RefLink` and resolved
//! against the reflink table only when rendering.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{Token, plain_text};
