//! Single-pass traversal engine.
//!
//! [`Linter`] parses one file, walks its AST once, hands every call and
//! construction call to the rules that registered for that kind, and routes
//! their diagnostics into a per-file [`ReportSink`].

use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;
use swc_ecma_ast::{CallExpr, NewExpr};
use swc_ecma_visit::{Visit, VisitWith};

use crate::{
    config::{Config, RuleLevel},
    core::{
        SourceContext, SourceLocation,
        parsers::js::{ParserOptions, parse_source},
        syntax::CallSite,
    },
    diagnostics::Diagnostic,
    directives::DisableContext,
    issues::{LintIssue, Severity},
    rules::{LintRule, Rule, RuleName, all_rules},
};

/// Receives diagnostics as rules produce them.
pub trait ReportSink {
    fn report(&mut self, rule: RuleName, severity: Severity, diagnostic: Diagnostic);
}

/// A rule together with the severity it reports at.
pub struct EnabledRule {
    pub rule: LintRule,
    pub severity: Severity,
}

pub struct Linter {
    rules: Vec<EnabledRule>,
    parser_options: ParserOptions,
}

impl Linter {
    pub fn new(rules: Vec<EnabledRule>, parser_options: ParserOptions) -> Self {
        Self {
            rules,
            parser_options,
        }
    }

    /// Build a linter with every rule the config does not turn off.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut rules = Vec::new();
        for rule in all_rules(config) {
            let severity = match config.rule_level(rule.name())? {
                RuleLevel::Off => continue,
                RuleLevel::Warn => Severity::Warning,
                RuleLevel::Error => Severity::Error,
            };
            rules.push(EnabledRule { rule, severity });
        }
        Ok(Self::new(rules, ParserOptions::new(config.ecma_version)))
    }

    pub fn enabled_rules(&self) -> impl Iterator<Item = RuleName> + '_ {
        self.rules.iter().map(|enabled| enabled.rule.name())
    }

    /// Lint one file's contents. Fails only when the source does not parse.
    pub fn lint_source(&self, code: String, file_path: &str) -> Result<Vec<LintIssue>> {
        let source_map = Arc::new(SourceMap::default());
        let parsed = parse_source(code, file_path, source_map, &self.parser_options)?;
        let disable_context = DisableContext::from_comments(&parsed.comments, &parsed.source_map);

        let mut sink = FileSink {
            file_path,
            source_map: &parsed.source_map,
            disable_context: &disable_context,
            issues: Vec::new(),
        };
        let mut visitor = CallSiteVisitor {
            rules: &self.rules,
            sink: &mut sink,
        };
        parsed.program.visit_with(&mut visitor);

        Ok(sink.issues)
    }
}

/// Delivers call sites to interested rules, in registration order.
struct CallSiteVisitor<'a, S: ReportSink> {
    rules: &'a [EnabledRule],
    sink: &'a mut S,
}

impl<S: ReportSink> CallSiteVisitor<'_, S> {
    fn dispatch(&mut self, site: &CallSite<'_>) {
        for enabled in self.rules {
            if !enabled.rule.node_kinds().contains(&site.kind) {
                continue;
            }
            for diagnostic in enabled.rule.check(site) {
                self.sink
                    .report(enabled.rule.name(), enabled.severity, diagnostic);
            }
        }
    }
}

impl<S: ReportSink> Visit for CallSiteVisitor<'_, S> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.dispatch(&CallSite::from_call(node));
        node.visit_children_with(self);
    }

    fn visit_new_expr(&mut self, node: &NewExpr) {
        self.dispatch(&CallSite::from_new(node));
        node.visit_children_with(self);
    }
}

/// Resolves diagnostics into located issues for one file.
struct FileSink<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    disable_context: &'a DisableContext,
    issues: Vec<LintIssue>,
}

impl ReportSink for FileSink<'_> {
    fn report(&mut self, rule: RuleName, severity: Severity, diagnostic: Diagnostic) {
        let loc = self.source_map.lookup_char_pos(diagnostic.span.lo);
        if self.disable_context.should_ignore(loc.line, rule) {
            tracing::trace!(file = self.file_path, line = loc.line, %rule, "suppressed");
            return;
        }

        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        self.issues.push(LintIssue {
            context: SourceContext::new(
                SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
                source_line,
            ),
            rule,
            severity,
            message: diagnostic.message.render(),
            message_key: diagnostic.message.key(),
            message_args: diagnostic.message.args().cloned().unwrap_or_default(),
        });
    }
}
