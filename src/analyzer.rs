//! Runs the configured rules over syntax trees.
//!
//! The analyzer owns a kind → rules dispatch table built once from each
//! rule's declared interests. A check walks the tree in preorder and hands
//! every node to the rules registered for its kind.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::base::LineIndex;
use crate::config::AnalyzerOptions;
use crate::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::fix::FixError;
use crate::parser::{SyntaxKind, SyntaxNode, parse};
use crate::rules::{Rule, RuleContext, RuleId};

/// Upper bound on fix passes in [`Analyzer::fix_all`]
const MAX_FIX_PASSES: usize = 64;

/// Checks trees against a fixed set of rules.
#[derive(Debug, Clone)]
pub struct Analyzer {
    options: AnalyzerOptions,
    rules: Vec<Rule>,
    dispatch: FxHashMap<SyntaxKind, Vec<usize>>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerOptions::default())
    }
}

impl Analyzer {
    /// Analyzer running every rule enabled in `options`
    pub fn new(options: AnalyzerOptions) -> Self {
        let rules = RuleId::ALL
            .into_iter()
            .filter(|id| options.is_enabled(*id))
            .map(|id| Rule::configured(id, &options))
            .collect();
        Self::with_rules(options, rules)
    }

    /// Analyzer running exactly `rules`
    pub fn with_rules(options: AnalyzerOptions, rules: Vec<Rule>) -> Self {
        let mut dispatch: FxHashMap<SyntaxKind, Vec<usize>> = FxHashMap::default();
        for (idx, rule) in rules.iter().enumerate() {
            for kind in rule.interests() {
                dispatch.entry(*kind).or_default().push(idx);
            }
        }
        Self {
            options,
            rules,
            dispatch,
        }
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    /// Diagnostics for one tree, ordered by position then rule id
    pub fn check(&self, root: &SyntaxNode) -> Vec<Diagnostic> {
        let line_index = LineIndex::new(&root.text().to_string());
        let ctx = RuleContext::new(&line_index);
        let mut collector = DiagnosticCollector::new();

        for node in root.descendants() {
            let Some(rule_indices) = self.dispatch.get(&node.kind()) else {
                continue;
            };
            for &idx in rule_indices {
                self.rules[idx].check(&node, &ctx, &mut collector);
            }
        }

        let mut diagnostics: Vec<Diagnostic> = collector
            .take()
            .into_iter()
            .map(|diag| {
                let severity = self.options.severity(diag.rule);
                diag.with_severity(severity)
            })
            .collect();
        diagnostics.sort_by(|a, b| (a.span.start, a.rule).cmp(&(b.span.start, b.rule)));
        debug!("check: {} diagnostic(s)", diagnostics.len());
        diagnostics
    }

    /// Parse `text` and check it. Parse errors do not stop the check.
    pub fn check_source(&self, text: &str) -> Vec<Diagnostic> {
        let parse = parse(text);
        if !parse.ok() {
            debug!("check_source: {} syntax error(s), checking anyway", parse.errors.len());
        }
        self.check(&parse.syntax())
    }

    /// Check many sources in parallel; results follow input order
    pub fn check_sources<S>(&self, sources: &[S]) -> Vec<Vec<Diagnostic>>
    where
        S: AsRef<str> + Sync,
    {
        sources
            .par_iter()
            .map(|source| self.check_source(source.as_ref()))
            .collect()
    }

    /// Apply the fix for `diagnostic` and return the new root
    pub fn fix(&self, root: &SyntaxNode, diagnostic: &Diagnostic) -> Result<SyntaxNode, FixError> {
        let rule = self
            .rule(diagnostic.rule)
            .ok_or(FixError::RuleDisabled(diagnostic.rule))?;
        rule.fix(root, diagnostic)
    }

    /// Like [`Analyzer::fix`], but a fix that does not apply leaves the tree
    /// as it is
    pub fn fix_or_keep(&self, root: &SyntaxNode, diagnostic: &Diagnostic) -> SyntaxNode {
        match self.fix(root, diagnostic) {
            Ok(fixed) => fixed,
            Err(err) => {
                debug!("fix_or_keep: {}", err);
                root.clone()
            }
        }
    }

    /// Apply fixes until no diagnostic of an enabled rule remains fixable
    pub fn fix_all(&self, text: &str) -> String {
        let mut root = parse(text).syntax();
        for _ in 0..MAX_FIX_PASSES {
            let fixed = self
                .check(&root)
                .iter()
                .find_map(|diag| self.fix(&root, diag).ok());
            match fixed {
                Some(next) => root = next,
                None => break,
            }
        }
        root.text().to_string()
    }
}
