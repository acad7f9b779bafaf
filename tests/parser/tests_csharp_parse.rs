//! Lossless parsing of C# sources.

use rstest::rstest;
use sharpstyle::parser::{
    AstNode, CompilationUnit, DelimitedList, SyntaxKind, UsingDirective, parse, tokenize,
};

use crate::helpers::source_fixtures::*;

fn count(source: &str, kind: SyntaxKind) -> usize {
    parse(source)
        .syntax()
        .descendants()
        .filter(|n| n.kind() == kind)
        .count()
}

// ============================================================================
// Round trip
// ============================================================================

#[rstest]
#[case(ORDERED_IN_MULTIPLE_NAMESPACES)]
#[case(STATICS_WITH_INLINE_COMMENTS)]
#[case(METHOD_EMPTY_SPLIT)]
#[case(OBJECT_CREATION_EMPTY_SPLIT)]
#[case("#region usings\nusing System;\n#endregion\n")]
#[case("var s = $\"{a}\" + @\"c:\\x\" + 'q';")]
#[case("class C { int[] xs = new int[] { 1, 2 }; string S => x?.ToString() ?? \"\"; }")]
#[case("record Point(int X, int Y);")]
#[case("unbalanced ) ] } { ( [")]
#[case("\u{feff}using System; // é ✓\n")]
fn test_text_round_trips(#[case] source: &str) {
    assert_eq!(parse(source).syntax().text().to_string(), source);
}

#[test]
fn test_tokens_cover_input_without_gaps() {
    let source = STATICS_WITH_GLOBAL_PREFIX;
    let tokens = tokenize(source);
    let rebuilt: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, source);
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_using_directives_per_scope() {
    let root = parse(ORDERED_IN_MULTIPLE_NAMESPACES).syntax();
    let unit = CompilationUnit::cast(root).unwrap();
    let counts: Vec<usize> = unit.scopes().map(|s| s.usings().len()).collect();
    assert_eq!(counts, vec![0, 4, 4]);
}

#[test]
fn test_directive_properties() {
    let root = parse(ORDERED_IN_NAMESPACE).syntax();
    let directives: Vec<_> = root.descendants().filter_map(UsingDirective::cast).collect();
    let summary: Vec<_> = directives
        .iter()
        .map(|d| (d.is_static(), d.alias(), d.target_name()))
        .map(|(s, a, t)| (s, a.map(|a| a.to_string()), t.map(|t| t.to_string())))
        .collect();
    assert_eq!(
        summary,
        vec![
            (false, None, Some("System".to_string())),
            (false, Some("Execute".to_string()), Some("System.Action".to_string())),
            (true, None, Some("System.Array".to_string())),
            (true, None, Some("System.Math".to_string())),
        ]
    );
}

#[rstest]
#[case(METHOD_EMPTY_SPLIT, SyntaxKind::METHOD_DECL, 1)]
#[case(CONSTRUCTOR_EMPTY_SPLIT, SyntaxKind::CONSTRUCTOR_DECL, 1)]
#[case(INVOCATION_EMPTY_SPLIT, SyntaxKind::INVOCATION_EXPR, 1)]
#[case(OBJECT_CREATION_EMPTY_SPLIT, SyntaxKind::OBJECT_CREATION_EXPR, 1)]
#[case("class C { int this[int i] => i; }", SyntaxKind::INDEXER_DECL, 1)]
#[case("class C { void M() { if (a) { while (b) { } } } }", SyntaxKind::INVOCATION_EXPR, 0)]
#[case("class C { void M() { A(B(C())); } }", SyntaxKind::INVOCATION_EXPR, 3)]
#[case("class C { void M() { x = a < b; y = c > d; } }", SyntaxKind::INVOCATION_EXPR, 0)]
#[case("class C { void M() { Get<int>(); } }", SyntaxKind::INVOCATION_EXPR, 1)]
fn test_shape_counts(#[case] source: &str, #[case] kind: SyntaxKind, #[case] expected: usize) {
    assert_eq!(count(source, kind), expected, "in:\n{}", source);
}

#[test]
fn test_every_owner_exposes_its_list() {
    let source = "class C
{
    C() { }
    void M(int a) { F(); var o = new object(); }
    int this[int i] => i;
}
";
    let root = parse(source).syntax();
    let owners = root
        .descendants()
        .filter_map(|n| DelimitedList::of_owner(&n))
        .count();
    assert_eq!(owners, 5);
}

#[test]
fn test_parse_errors_are_collected_not_fatal() {
    let parse = parse("namespace { using ; class }");
    assert!(!parse.ok());
    assert!(!parse.errors.is_empty());
    assert_eq!(parse.syntax().kind(), SyntaxKind::SOURCE_FILE);
}
