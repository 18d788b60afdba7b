//! Suppression directives in source comments.
//!
//! Supports rule-specific disable comments:
//! - `rxlint-disable-next-line` - disable all rules for the next line
//! - `rxlint-disable-next-line no-invalid-regexp` - disable one rule
//! - `rxlint-disable-line` - disable rules for the comment's own line
//! - `rxlint-disable` / `rxlint-enable` - range-based disabling

use std::collections::{HashMap, HashSet};

use swc_common::{SourceMap, comments::SingleThreadedComments};

use crate::rules::RuleName;

/// Parsed rxlint directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Disable { rules: HashSet<RuleName> },
    Enable { rules: HashSet<RuleName> },
    DisableLine { rules: HashSet<RuleName> },
    DisableNextLine { rules: HashSet<RuleName> },
}

impl Directive {
    /// Parse directive from comment text.
    /// Returns None if not an rxlint directive.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        // Order matters: check longer prefixes first
        if let Some(rest) = text.strip_prefix("rxlint-disable-next-line") {
            return Some(Self::DisableNextLine {
                rules: Self::parse_rules(rest),
            });
        }
        if let Some(rest) = text.strip_prefix("rxlint-disable-line") {
            return Some(Self::DisableLine {
                rules: Self::parse_rules(rest),
            });
        }
        if let Some(rest) = text.strip_prefix("rxlint-disable") {
            return Some(Self::Disable {
                rules: Self::parse_rules(rest),
            });
        }
        if let Some(rest) = text.strip_prefix("rxlint-enable") {
            return Some(Self::Enable {
                rules: Self::parse_rules(rest),
            });
        }

        None
    }

    fn parse_rules(rest: &str) -> HashSet<RuleName> {
        let parsed: HashSet<_> = rest
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter_map(|name| name.parse().ok())
            .collect();

        // No (known) rules specified = all rules
        if parsed.is_empty() {
            RuleName::all().into_iter().collect()
        } else {
            parsed
        }
    }
}

/// Range representing disabled lines [start, end] inclusive.
#[derive(Debug, Clone, Copy)]
struct DisabledRange {
    start: usize,
    end: usize, // usize::MAX for open-ended
}

/// Tracks disabled lines per rule for a single file.
#[derive(Debug, Default)]
pub struct DisableContext {
    /// Single-line disables: rule -> set of line numbers
    disabled_lines: HashMap<RuleName, HashSet<usize>>,
    /// Range-based disables: rule -> list of (start, end) ranges
    disabled_ranges: HashMap<RuleName, Vec<DisabledRange>>,
}

impl DisableContext {
    /// Check if a line should be ignored for a specific rule.
    pub fn should_ignore(&self, line: usize, rule: RuleName) -> bool {
        if let Some(lines) = self.disabled_lines.get(&rule)
            && lines.contains(&line)
        {
            return true;
        }
        if let Some(ranges) = self.disabled_ranges.get(&rule)
            && ranges.iter().any(|r| line >= r.start && line <= r.end)
        {
            return true;
        }
        false
    }

    /// Build DisableContext from SWC comments.
    pub fn from_comments(comments: &SingleThreadedComments, source_map: &SourceMap) -> Self {
        let mut ctx = Self::default();
        let (leading, trailing) = comments.borrow_all();

        let mut all_comments: Vec<_> = leading
            .iter()
            .chain(trailing.iter())
            .flat_map(|(_, cmts)| cmts.iter())
            .collect();
        all_comments.sort_by_key(|cmt| cmt.span.lo);

        // Track open disable ranges per rule
        let mut open_ranges: HashMap<RuleName, usize> = HashMap::new();

        for cmt in all_comments {
            let Some(directive) = Directive::parse(&cmt.text) else {
                continue;
            };
            let line = source_map.lookup_char_pos(cmt.span.lo).line;

            match directive {
                Directive::Disable { rules } => {
                    for rule in rules {
                        // Only start a new range if not already open
                        open_ranges.entry(rule).or_insert(line);
                    }
                }
                Directive::Enable { rules } => {
                    for rule in rules {
                        if let Some(start) = open_ranges.remove(&rule) {
                            ctx.disabled_ranges
                                .entry(rule)
                                .or_default()
                                .push(DisabledRange {
                                    start,
                                    end: line.saturating_sub(1),
                                });
                        }
                    }
                }
                Directive::DisableLine { rules } => ctx.disable_line(line, rules),
                Directive::DisableNextLine { rules } => ctx.disable_line(line + 1, rules),
            }
        }

        // Close any open ranges (extend to end of file)
        for (rule, start) in open_ranges {
            ctx.disabled_ranges
                .entry(rule)
                .or_default()
                .push(DisabledRange {
                    start,
                    end: usize::MAX,
                });
        }

        ctx
    }

    fn disable_line(&mut self, line: usize, rules: HashSet<RuleName>) {
        for rule in rules {
            self.disabled_lines.entry(rule).or_default().insert(line);
        }
    }
}
