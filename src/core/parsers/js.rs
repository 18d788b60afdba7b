use std::{path::Path, sync::Arc};

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap, comments::SingleThreadedComments};
use swc_ecma_ast::{EsVersion, Expr, Lit, Program, Stmt};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax, lexer::Lexer};

use crate::config::EcmaVersion;

/// File extensions the linter parses.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

/// Options shared by source parsing and RegExp flags checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    pub ecma_version: EcmaVersion,
}

impl ParserOptions {
    pub fn new(ecma_version: EcmaVersion) -> Self {
        Self { ecma_version }
    }

    pub fn target(&self) -> EsVersion {
        self.ecma_version.to_swc()
    }
}

pub struct ParsedSource {
    pub program: Program,
    pub source_map: Arc<SourceMap>,
    pub comments: SingleThreadedComments,
}

/// Pick the grammar for a file from its extension.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    let ext = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match ext {
        "ts" | "mts" | "cts" => Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        }),
        "tsx" => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse JS/TS source code into a program (module or script).
///
/// Accepts a shared SourceMap so callers can resolve spans afterwards.
/// Recoverable syntax errors are logged and otherwise ignored; only a hard
/// failure is returned as an error.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
    options: &ParserOptions,
) -> Result<ParsedSource> {
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);
        let comments = SingleThreadedComments::default();

        let program = {
            let lexer = Lexer::new(
                syntax_for_path(file_path),
                options.target(),
                StringInput::from(&*source_file),
                Some(&comments),
            );
            let mut parser = Parser::new_from(lexer);
            let program = parser
                .parse_program()
                .map_err(|e| anyhow!("{:?}", e.kind()))?;

            let recovered = parser.take_errors();
            if !recovered.is_empty() {
                tracing::debug!(
                    file = file_path,
                    count = recovered.len(),
                    "recovered from syntax errors"
                );
            }
            program
        };

        Ok(ParsedSource {
            program,
            source_map,
            comments,
        })
    })
}

/// What the parser made of a one-statement regex literal such as `/./gi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexLiteral {
    /// The program has no statements.
    Empty,
    /// The first statement is a regex literal. `value` is `None` when the
    /// parser accepted the text but flagged the literal itself (unknown or
    /// repeated flag), i.e. the literal has no usable value.
    Regex {
        flags: String,
        value: Option<String>,
    },
    /// The first statement is anything else.
    Other,
}

/// Regex flags the grammar accepts at each edition.
fn regex_flags_for(version: EcmaVersion) -> &'static str {
    match version {
        EcmaVersion::Es5 => "gim",
        EcmaVersion::Es2015 | EcmaVersion::Es2016 | EcmaVersion::Es2017 => "gimuy",
        EcmaVersion::Es2018 | EcmaVersion::Es2019 | EcmaVersion::Es2020 | EcmaVersion::Es2021 => {
            "gimsuy"
        }
        EcmaVersion::Es2022 => "dgimsuy",
        EcmaVersion::Latest => "dgimsuvy",
    }
}

/// Known at `version`, none repeated, and never `u` together with `v`.
fn flags_allowed(flags: &str, version: EcmaVersion) -> bool {
    let allowed = regex_flags_for(version);
    let mut seen = String::with_capacity(flags.len());
    let known = flags.chars().all(|c| {
        let fresh = !seen.contains(c);
        seen.push(c);
        fresh && allowed.contains(c)
    });
    known && !(flags.contains('u') && flags.contains('v'))
}

/// Parse `source` as a standalone script and classify its first statement.
///
/// The parser does not gate flags on the target edition, so a literal whose
/// flags are not legal at `options.ecma_version` is also reported without a
/// value.
///
/// Returns an error only when the text does not parse at all.
pub fn parse_regex_literal(source: &str, options: &ParserOptions) -> Result<RegexLiteral> {
    let source_map = SourceMap::default();

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Anon.into(), source.to_string());
        let lexer = Lexer::new(
            Syntax::Es(EsSyntax::default()),
            options.target(),
            StringInput::from(&*source_file),
            None,
        );
        let mut parser = Parser::new_from(lexer);
        let script = parser
            .parse_script()
            .map_err(|e| anyhow!("{:?}", e.kind()))?;
        let flagged = !parser.take_errors().is_empty();

        let Some(first) = script.body.first() else {
            return Ok(RegexLiteral::Empty);
        };

        let literal = match first {
            Stmt::Expr(stmt) => match &*stmt.expr {
                Expr::Lit(Lit::Regex(regex)) => RegexLiteral::Regex {
                    flags: regex.flags.to_string(),
                    value: (!flagged && flags_allowed(&regex.flags, options.ecma_version))
                        .then(|| format!("/{}/{}", regex.exp, regex.flags)),
                },
                _ => RegexLiteral::Other,
            },
            _ => RegexLiteral::Other,
        };
        Ok(literal)
    })
}
