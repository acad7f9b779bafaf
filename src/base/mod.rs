//! Foundation types for the sharpstyle toolchain.
//!
//! This module provides fundamental types used throughout the analyzer:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineIndex`] - Offset to line/column conversion
//! - [`Position`], [`Span`] - 1-based line/column positions for diagnostics
//!
//! This module has NO dependencies on other sharpstyle modules.

mod line_index;
mod position;

pub use line_index::LineIndex;
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
