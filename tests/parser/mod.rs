//! Parser tests
//!
//! Tests for the lossless C# parser:
//! - Round-tripping arbitrary input
//! - Using directive and namespace structure
//! - Declaration and expression shapes the rules inspect

mod tests_csharp_parse;
