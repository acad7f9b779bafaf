//! Records, options and batch checks.

use sharpstyle::{Analyzer, AnalyzerOptions, RuleId, Severity};

use crate::helpers::check_helpers::diagnostics;
use crate::helpers::source_fixtures::*;

#[test]
fn test_records_serialize_to_wire_shape() {
    let records: Vec<_> = diagnostics(STATICS_REVERSED_IN_TWO_NAMESPACES)
        .iter()
        .map(|d| d.to_record())
        .collect();
    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {
                "ruleId": "SA1217",
                "location": { "line": 5, "column": 5 },
                "messageArguments": ["System.Math", "System.Array"]
            },
            {
                "ruleId": "SA1217",
                "location": { "line": 11, "column": 5 },
                "messageArguments": ["System.Math", "System.Array"]
            }
        ])
    );
}

#[test]
fn test_placement_record_has_empty_arguments() {
    let records: Vec<_> = diagnostics(INVOCATION_EMPTY_SPLIT)
        .iter()
        .map(|d| d.to_record())
        .collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rule_id, RuleId::ClosingParenthesisPlacement);
    assert!(records[0].message_arguments.is_empty());
}

#[test]
fn test_options_from_json_drive_the_analyzer() {
    let options = AnalyzerOptions::from_json(
        r#"{
            "disabledRules": ["SA1112"],
            "severityOverrides": { "SA1217": "error" }
        }"#,
    )
    .unwrap();
    let analyzer = Analyzer::new(options);

    assert!(analyzer.check_source(METHOD_EMPTY_SPLIT).is_empty());
    let diags = analyzer.check_source(STATICS_REVERSED_IN_TWO_NAMESPACES);
    assert_eq!(diags.len(), 2);
    assert!(diags.iter().all(|d| d.severity == Severity::Error));
}

#[test]
fn test_unknown_option_is_rejected() {
    assert!(AnalyzerOptions::from_json(r#"{ "maxLineLength": 120 }"#).is_err());
}

#[test]
fn test_check_sources_keeps_input_order() {
    let sources = [
        ORDERED_IN_NAMESPACE,
        STATICS_REVERSED_IN_TWO_NAMESPACES,
        METHOD_EMPTY_SPLIT,
        "",
    ];
    let counts: Vec<usize> = Analyzer::default()
        .check_sources(&sources)
        .iter()
        .map(Vec::len)
        .collect();
    assert_eq!(counts, vec![0, 2, 1, 0]);
}
