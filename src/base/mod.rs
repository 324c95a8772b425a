//! Foundation types for the indexer.
//!
//! This module provides fundamental types used throughout the engine:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Span`] - Line/column ranges attached to symbols
//! - Supported file extensions
//!
//! This module has NO dependencies on other codeindex modules.

pub mod constants;
mod position;
mod span;

pub use position::{Position, Span};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
