//! Fix provider tests
//!
//! - Reordering using directives within their buckets
//! - Joining an empty list's closing delimiter onto the opening line

mod tests_placement_fix;
mod tests_reorder_fix;
