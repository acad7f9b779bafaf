//! Reordering fix for SA1210 / SA1211 / SA1217.

use rstest::rstest;
use sharpstyle::{Analyzer, AnalyzerOptions, FixError, OrderKey, RuleId, parse};

use crate::helpers::check_helpers::{assert_clean, fix_first, fix_first_with};
use crate::helpers::source_fixtures::*;

#[test]
fn test_fix_reorders_first_namespace_only() {
    let fixed = fix_first(RuleId::StaticUsingOrder, STATICS_REVERSED_IN_TWO_NAMESPACES).unwrap();
    assert_eq!(
        fixed,
        "namespace Foo
{
    using System;
    using Execute = System.Action;
    using static System.Array;
    using static System.Math;
}

namespace Bar
{
    using static System.Math;
    using Execute = System.Action;
    using static System.Array;
    using System;
}
"
    );
}

#[test]
fn test_fix_all_leaves_other_directives_in_their_slots() {
    let fixed = Analyzer::default().fix_all(STATICS_REVERSED_IN_TWO_NAMESPACES);
    assert_eq!(
        fixed,
        "namespace Foo
{
    using System;
    using Execute = System.Action;
    using static System.Array;
    using static System.Math;
}

namespace Bar
{
    using static System.Array;
    using Execute = System.Action;
    using static System.Math;
    using System;
}
"
    );
    assert_clean(RuleId::StaticUsingOrder, &fixed);
}

#[test]
fn test_inline_comments_survive_reordering() {
    let source = "namespace Foo
{
    using static /* A */ System.Math;
    using static /* B */ System.Array;
}
";
    let fixed = fix_first(RuleId::StaticUsingOrder, source).unwrap();
    assert_eq!(
        fixed,
        "namespace Foo
{
    using static /* B */ System.Array;
    using static /* A */ System.Math;
}
"
    );
}

#[test]
fn test_global_qualifier_is_kept_in_the_text() {
    let fixed = fix_first(RuleId::StaticUsingOrder, STATICS_WITH_GLOBAL_PREFIX).unwrap();
    assert!(fixed.contains(
        "    using static global::System.Array;\n    using static System.Math;\n"
    ));
}

#[rstest]
#[case::lf("using static B;\nusing static A;\n", "using static A;\nusing static B;\n")]
#[case::crlf("using static B;\r\nusing static A;\r\n", "using static A;\r\nusing static B;\r\n")]
#[case::blank_line(
    "using static B;\n\nusing static A;\n",
    "using static A;\n\nusing static B;\n"
)]
#[case::tabs("\tusing static B;\n\tusing static A;\n", "\tusing static A;\n\tusing static B;\n")]
fn test_trivia_between_slots_is_preserved(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(fix_first(RuleId::StaticUsingOrder, source).unwrap(), expected);
}

#[rstest]
#[case::line_comments("// Copyright (c) Contoso. All rights reserved.\n// Licensed under MIT.\n")]
#[case::block_comment("/* Copyright (c) Contoso. */\n")]
fn test_file_header_stays_on_top(#[case] header: &str) {
    let source = format!("{header}using static System.Math;\nusing static System.Array;\n");
    let fixed = Analyzer::default().fix_all(&source);
    assert_eq!(
        fixed,
        format!("{header}using static System.Array;\nusing static System.Math;\n")
    );
}

#[test]
fn test_namespace_bucket_fix() {
    let source = "using Xunit;\nusing static System.Math;\nusing System;\n";
    assert_eq!(
        fix_first(RuleId::NamespaceUsingOrder, source).unwrap(),
        "using System;\nusing static System.Math;\nusing Xunit;\n"
    );
}

#[rstest]
#[case::alias_name(
    OrderKey::AliasName,
    "using Zulu = System.Action;\nusing Alpha = System.Func<int>;\n",
    "using Alpha = System.Func<int>;\nusing Zulu = System.Action;\n"
)]
#[case::target(
    OrderKey::Target,
    "using Alpha = System.Func<int>;\nusing Zulu = System.Action;\n",
    "using Zulu = System.Action;\nusing Alpha = System.Func<int>;\n"
)]
fn test_alias_bucket_fix(#[case] key: OrderKey, #[case] source: &str, #[case] expected: &str) {
    let options = AnalyzerOptions::default().with_alias_order_key(key);
    assert_eq!(
        fix_first_with(options, RuleId::AliasUsingOrder, source).unwrap(),
        expected
    );
}

#[test]
fn test_second_application_is_not_applicable() {
    let analyzer = Analyzer::default();
    let root = parse(STATICS_REVERSED_IN_TWO_NAMESPACES).syntax();
    let diag = analyzer
        .check(&root)
        .into_iter()
        .find(|d| d.rule == RuleId::StaticUsingOrder)
        .unwrap();

    let once = analyzer.fix(&root, &diag).unwrap();
    let err = analyzer.fix(&once, &diag).unwrap_err();
    assert!(err.is_not_applicable());

    let kept = analyzer.fix_or_keep(&once, &diag);
    assert_eq!(kept.text().to_string(), once.text().to_string());
}

#[test]
fn test_fix_for_disabled_rule_is_refused() {
    let source = "using static B;\nusing static A;\n";
    let root = parse(source).syntax();
    let diag = Analyzer::default().check(&root).remove(0);

    let disabled = Analyzer::new(AnalyzerOptions::default().disable(RuleId::StaticUsingOrder));
    assert_eq!(
        disabled.fix(&root, &diag).unwrap_err(),
        FixError::RuleDisabled(RuleId::StaticUsingOrder)
    );
}
