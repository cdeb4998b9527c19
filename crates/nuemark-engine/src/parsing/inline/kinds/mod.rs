//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `` ` `` raw zone that suppresses other parsing
//! - **`Emphasis`**: `*`, `_` and their doubled forms
//! - **`Link`**: `[`, `]`, `![`, `(`, `)` and the backslash escape
//!
//! The parser calls these constants; it never hardcodes delimiters.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
