//! Analyzer surface tests
//!
//! - Wire records
//! - Options loaded from JSON
//! - Batch checking

mod tests_analyzer_surface;
