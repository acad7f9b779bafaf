//! Rule tests
//!
//! Tests for the style rules run through the analyzer:
//! - SA1217 static using ordering
//! - SA1210 / SA1211 namespace and alias using ordering
//! - SA1112 closing parenthesis placement

mod tests_closing_parenthesis;
mod tests_static_using_order;
