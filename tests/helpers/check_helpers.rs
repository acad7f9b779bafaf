//! Check and fix helpers.

use sharpstyle::{Analyzer, AnalyzerOptions, Diagnostic, FixError, RuleId, parse};

/// All diagnostics for a source string with the default options.
pub fn diagnostics(source: &str) -> Vec<Diagnostic> {
    Analyzer::default().check_source(source)
}

/// Diagnostics of one rule.
pub fn diagnostics_for(rule: RuleId, source: &str) -> Vec<Diagnostic> {
    diagnostics(source)
        .into_iter()
        .filter(|d| d.rule == rule)
        .collect()
}

/// `(line, column)` of each diagnostic of one rule.
pub fn locations(rule: RuleId, source: &str) -> Vec<(usize, usize)> {
    diagnostics_for(rule, source)
        .iter()
        .map(|d| (d.location().line, d.location().column))
        .collect()
}

/// Assert a source produces no diagnostic of `rule`.
pub fn assert_clean(rule: RuleId, source: &str) {
    let found = diagnostics_for(rule, source);
    assert!(
        found.is_empty(),
        "Expected no {} diagnostics, got:\n{}",
        rule,
        found
            .iter()
            .map(|d| format!("  {}", d))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Apply the fix for the first diagnostic of `rule` and return the new text.
pub fn fix_first(rule: RuleId, source: &str) -> Result<String, FixError> {
    fix_first_with(AnalyzerOptions::default(), rule, source)
}

pub fn fix_first_with(
    options: AnalyzerOptions,
    rule: RuleId,
    source: &str,
) -> Result<String, FixError> {
    let analyzer = Analyzer::new(options);
    let root = parse(source).syntax();
    let diagnostic = analyzer
        .check(&root)
        .into_iter()
        .find(|d| d.rule == rule)
        .unwrap_or_else(|| panic!("no {} diagnostic in:\n{}", rule, source));
    analyzer
        .fix(&root, &diagnostic)
        .map(|fixed| fixed.text().to_string())
}
