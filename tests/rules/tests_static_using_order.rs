//! SA1217: using static directives ordered alphabetically.

use rstest::rstest;
use sharpstyle::RuleId;

use crate::helpers::check_helpers::{assert_clean, diagnostics_for, locations};
use crate::helpers::source_fixtures::*;

const RULE: RuleId = RuleId::StaticUsingOrder;

#[rstest]
#[case::namespace(ORDERED_IN_NAMESPACE)]
#[case::multiple_namespaces(ORDERED_IN_MULTIPLE_NAMESPACES)]
#[case::compilation_unit(ORDERED_IN_COMPILATION_UNIT)]
#[case::inline_comments(STATICS_WITH_INLINE_COMMENTS)]
fn test_ordered_statics_are_clean(#[case] source: &str) {
    assert_clean(RULE, source);
}

#[test]
fn test_reversed_statics_reported_once_per_namespace() {
    let diags = diagnostics_for(RULE, STATICS_REVERSED_IN_TWO_NAMESPACES);
    assert_eq!(diags.len(), 2);
    assert_eq!(
        locations(RULE, STATICS_REVERSED_IN_TWO_NAMESPACES),
        vec![(5, 5), (11, 5)]
    );
    for diag in &diags {
        assert_eq!(diag.args, ["System.Math", "System.Array"]);
    }
}

#[test]
fn test_global_prefix_is_ignored_for_ordering() {
    let diags = diagnostics_for(RULE, STATICS_WITH_GLOBAL_PREFIX);
    assert_eq!(diags.len(), 1);
    assert_eq!((diags[0].location().line, diags[0].location().column), (5, 5));
    assert_eq!(diags[0].args, ["System.Math", "System.Array"]);
}

#[rstest]
#[case("using static A;\n", 0)]
#[case("using static A;\nusing static B;\n", 0)]
#[case("using static B;\nusing static A;\n", 1)]
#[case("using static C;\nusing static B;\nusing static A;\n", 2)]
#[case("using static B;\nusing static A;\nusing static D;\nusing static C;\n", 2)]
#[case("using static A;\nusing static A;\n", 0)]
#[case("using static System.Ärger;\nusing static System.Math;\nusing static System.Array;\n", 2)]
#[case("using static Ωmega;\nusing static Alpha;\n", 1)]
#[case("using static Straße.Ä;\nusing static Straße.Ö;\n", 0)]
fn test_one_diagnostic_per_adjacent_inversion(#[case] source: &str, #[case] expected: usize) {
    assert_eq!(diagnostics_for(RULE, source).len(), expected);
}

#[test]
fn test_ordinal_comparison_is_case_sensitive() {
    // 'Z' (0x5A) sorts before 'a' (0x61)
    assert_clean(RULE, "using static System.Zeta;\nusing static System.alpha;\n");
    assert_eq!(
        diagnostics_for(RULE, "using static System.alpha;\nusing static System.Zeta;\n").len(),
        1
    );
}

#[test]
fn test_scopes_do_not_compare_across_boundaries() {
    let source = "using static System.Math;

namespace Foo
{
    using static System.Array;
}
";
    assert_clean(RULE, source);
}

#[test]
fn test_file_scoped_namespace_is_its_own_scope() {
    let source = "using static System.Text.Encoding;

namespace Foo;

using static System.Math;
using static System.Array;
";
    assert_eq!(locations(RULE, source), vec![(5, 1)]);
}

#[test]
fn test_global_using_static_is_ordered_with_the_rest() {
    let source = "global using static System.Math;\nusing static System.Array;\n";
    let diags = diagnostics_for(RULE, source);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].span.start.column, 1);
}

#[test]
fn test_result_is_deterministic() {
    let first = diagnostics_for(RULE, STATICS_REVERSED_IN_TWO_NAMESPACES);
    let second = diagnostics_for(RULE, STATICS_REVERSED_IN_TWO_NAMESPACES);
    assert_eq!(first, second);
}

#[test]
fn test_non_ascii_names_keep_their_full_target() {
    let source = "using static System.Ärger;\nusing static System.Array;\n";
    let diags = diagnostics_for(RULE, source);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].args, ["System.Ärger", "System.Array"]);
    assert!(sharpstyle::parse(source).ok());
}
