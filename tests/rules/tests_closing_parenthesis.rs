//! SA1112: closing parenthesis on the line of the opening parenthesis.

use rstest::rstest;
use sharpstyle::RuleId;

use crate::helpers::check_helpers::{diagnostics_for, locations};
use crate::helpers::source_fixtures::*;

const RULE: RuleId = RuleId::ClosingParenthesisPlacement;

#[rstest]
#[case::method(METHOD_EMPTY_SPLIT, (5, 1))]
#[case::constructor(CONSTRUCTOR_EMPTY_SPLIT, (5, 1))]
#[case::invocation(INVOCATION_EMPTY_SPLIT, (7, 1))]
#[case::object_creation(OBJECT_CREATION_EMPTY_SPLIT, (7, 1))]
fn test_empty_list_split_across_lines(#[case] source: &str, #[case] expected: (usize, usize)) {
    assert_eq!(locations(RULE, source), vec![expected]);
}

#[rstest]
#[case::method_same_line(
    "
class Foo
{
    public void Bar()
    {

    }
}"
)]
#[case::method_with_parameter(
    "
class Foo
{
    public void Bar(
string s)
    {

    }
}"
)]
#[case::constructor_same_line(
    "
class Foo
{
    public Foo()
    {

    }
}"
)]
#[case::constructor_with_parameter(
    "
class Foo
{
    public Foo(
string s)
    {

    }
}"
)]
#[case::call_with_argument(
    "
class Foo
{
    public void Bar()
    {
        var s = this.Equals(new Foo()
);
    }
}"
)]
#[case::call_same_line(
    "
class Foo
{
    public void Bar()
    {
        var s = ToString();
    }
}"
)]
#[case::creation_with_argument(
    "
public class CtorWithParams
{
    public CtorWithParams(string s)
    {
    }
}
class Foo
{
    public void Bar()
    {
        var o = new CtorWithParams(string.Empty
);
    }
}"
)]
#[case::creation_same_line(
    "
class Foo
{
    public void Bar()
    {
        var o = new object();
    }
}"
)]
#[case::indexer_with_parameter(
    "
class Foo
{
    public int this[int index
]
    {
        get
        {
            return 1;
        }
    }
}"
)]
#[case::creation_without_parentheses(
    "
public class Foo
{
    public void Bar()
    {
        System.Collections.Generic.Dictionary<int, int> cache = new System.Collections.Generic.Dictionary<int, int> { { 3, 3 } };
    }
}"
)]
fn test_not_reported(#[case] source: &str) {
    assert!(diagnostics_for(RULE, source).is_empty(), "unexpected diagnostic in:\n{}", source);
}

#[test]
fn test_empty_indexer_parameter_list_split_across_lines() {
    let source = "class Foo\n{\n    public int this[\n    ] => 1;\n}\n";
    assert_eq!(locations(RULE, source), vec![(4, 5)]);
}

#[test]
fn test_diagnostic_has_no_arguments() {
    let diags = diagnostics_for(RULE, METHOD_EMPTY_SPLIT);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].args.is_empty());
    assert_eq!(diags[0].message(), "Closing parenthesis must be on line of opening parenthesis");
}

#[test]
fn test_nested_calls_are_checked_independently() {
    let source = "class Foo
{
    void Bar()
    {
        Outer(Inner(
        ));
    }
}
";
    // Inner is empty and split; Outer has Inner as content
    assert_eq!(locations(RULE, source), vec![(6, 9)]);
}

#[test]
fn test_chained_calls_each_own_their_list() {
    let source = "class Foo
{
    void Bar()
    {
        builder.Build(
        ).Run(
        );
    }
}
";
    assert_eq!(locations(RULE, source), vec![(6, 9), (7, 9)]);
}

#[rstest]
#[case::delegate("delegate void Handler(\n);\n")]
#[case::constructor_initializer("class C\n{\n    C() : base(\n    )\n    {\n    }\n}\n")]
#[case::typeof_expression("class C { void M() { var t = typeof(C\n); } }")]
fn test_shapes_outside_the_rule_are_ignored(#[case] source: &str) {
    assert!(diagnostics_for(RULE, source).is_empty());
}
