//! Placement fix for SA1112.

use rstest::rstest;
use sharpstyle::parser::DelimitedList;
use sharpstyle::{Analyzer, RuleId, parse};

use crate::helpers::check_helpers::{assert_clean, fix_first};
use crate::helpers::source_fixtures::*;

const RULE: RuleId = RuleId::ClosingParenthesisPlacement;

#[rstest]
#[case::method(
    METHOD_EMPTY_SPLIT,
    "
class Foo
{
    public void Bar()
    {

    }
}"
)]
#[case::constructor(
    CONSTRUCTOR_EMPTY_SPLIT,
    "
class Foo
{
    public Foo()
    {

    }
}"
)]
#[case::invocation(
    INVOCATION_EMPTY_SPLIT,
    "
class Foo
{
    public void Bar()
    {
        var s = ToString();
    }
}"
)]
#[case::object_creation(
    OBJECT_CREATION_EMPTY_SPLIT,
    "
class Foo
{
    public void Bar()
    {
        var o = new object();
    }
}"
)]
fn test_close_joined_onto_open_line(#[case] source: &str, #[case] expected: &str) {
    let fixed = fix_first(RULE, source).unwrap();
    assert_eq!(fixed, expected);
    assert_clean(RULE, &fixed);
}

#[test]
fn test_indexer_bracket_joined() {
    let source = "class Foo\n{\n    public int this[\n    ] => 1;\n}\n";
    assert_eq!(
        fix_first(RULE, source).unwrap(),
        "class Foo\n{\n    public int this[] => 1;\n}\n"
    );
}

#[test]
fn test_comment_between_delimiters_is_kept() {
    let source = "class C { void M() { F(/* nothing */\n); } }";
    let fixed = fix_first(RULE, source).unwrap();
    assert!(fixed.contains("/* nothing */"));
    assert!(fixed.contains("F()"));
}

#[test]
fn test_second_application_is_not_applicable() {
    let analyzer = Analyzer::default();
    let root = parse(METHOD_EMPTY_SPLIT).syntax();
    let diag = analyzer.check(&root).remove(0);
    assert_eq!(diag.rule, RULE);

    let once = analyzer.fix(&root, &diag).unwrap();
    assert!(analyzer.fix(&once, &diag).unwrap_err().is_not_applicable());
    assert_eq!(
        analyzer.fix_or_keep(&once, &diag).text().to_string(),
        once.text().to_string()
    );
}

#[test]
fn test_fix_all_handles_nested_and_chained_lists() {
    let source = "class Foo
{
    void Bar(
    )
    {
        Outer(Inner(
        ));
        builder.Build(
        ).Run(
        );
    }
}
";
    let fixed = Analyzer::default().fix_all(source);
    assert_eq!(
        fixed,
        "class Foo
{
    void Bar()
    {
        Outer(Inner());
        builder.Build().Run();
    }
}
"
    );
    assert_clean(RULE, &fixed);
}

#[rstest]
#[case::block_comment("class C\n{\n    void M(/* none */\n    )\n    {\n    }\n}\n")]
#[case::line_comment("class C\n{\n    void M( // none\n    )\n    {\n    }\n}\n")]
fn test_fixed_tree_matches_a_fresh_parse(#[case] source: &str) {
    let analyzer = Analyzer::default();
    let root = parse(source).syntax();
    let diag = analyzer.check(&root).remove(0);
    let fixed = analyzer.fix(&root, &diag).unwrap();

    let reparsed = parse(&fixed.text().to_string()).syntax();
    assert_eq!(fixed.green().into_owned(), reparsed.green().into_owned());

    let list = fixed
        .descendants()
        .find_map(|n| DelimitedList::of_owner(&n))
        .unwrap();
    let pair = list.delimiters().unwrap();
    assert!(!pair.has_content_between);
    assert_eq!(pair.close.text_range().start(), pair.open.text_range().end());
}

#[test]
fn test_relocated_comment_sits_beside_the_list() {
    let source = "class C { void M() { F(/* none */\n); } }";
    let analyzer = Analyzer::default();
    let root = parse(source).syntax();
    let diag = analyzer.check(&root).remove(0);
    let fixed = analyzer.fix(&root, &diag).unwrap();

    let list = fixed
        .descendants()
        .find(|n| n.kind() == sharpstyle::SyntaxKind::ARGUMENT_LIST)
        .unwrap();
    assert_eq!(list.text().to_string(), "()");
    assert_eq!(list.parent().unwrap().kind(), sharpstyle::SyntaxKind::INVOCATION_EXPR);
}
