use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use clap::ValueEnum;
use glob::Pattern;
use serde::{Deserialize, Serialize};
use swc_ecma_ast::EsVersion;

use crate::rules::RuleName;

pub const CONFIG_FILE_NAME: &str = ".rxlintrc.json";

/// Grammar level used for parsing sources and probing RegExp flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EcmaVersion {
    Es5,
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    #[default]
    Latest,
}

impl EcmaVersion {
    pub fn to_swc(self) -> EsVersion {
        match self {
            EcmaVersion::Es5 => EsVersion::Es5,
            EcmaVersion::Es2015 => EsVersion::Es2015,
            EcmaVersion::Es2016 => EsVersion::Es2016,
            EcmaVersion::Es2017 => EsVersion::Es2017,
            EcmaVersion::Es2018 => EsVersion::Es2018,
            EcmaVersion::Es2019 => EsVersion::Es2019,
            EcmaVersion::Es2020 => EsVersion::Es2020,
            EcmaVersion::Es2021 => EsVersion::Es2021,
            EcmaVersion::Es2022 => EsVersion::Es2022,
            EcmaVersion::Latest => EsVersion::EsNext,
        }
    }
}

/// Which regex engine decides whether a RegExp pattern compiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PatternDialect {
    /// ECMAScript regex syntax, as `new RegExp(pattern)` parses it.
    #[default]
    Ecma,
    /// Linear-time engine; rejects look-around and back-references.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

/// A rule entry in the `rules` table: either `"error"` or `["error", ...options]`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RuleSetting {
    Level(RuleLevel),
    WithOptions(Vec<serde_json::Value>),
}

impl RuleSetting {
    /// Resolve the configured level, rejecting options the rule does not declare.
    pub fn level(&self, rule: RuleName) -> Result<RuleLevel> {
        match self {
            RuleSetting::Level(level) => Ok(*level),
            RuleSetting::WithOptions(values) => {
                let Some((first, options)) = values.split_first() else {
                    bail!("Rule '{}' has an empty setting", rule);
                };
                let level: RuleLevel = serde_json::from_value(first.clone())
                    .with_context(|| format!("Invalid level for rule '{}': {}", rule, first))?;
                if options.len() > rule.option_count() {
                    bail!(
                        "Rule '{}' accepts {} option(s) but {} were given",
                        rule,
                        rule.option_count(),
                        options.len()
                    );
                }
                Ok(level)
            }
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub ecma_version: EcmaVersion,
    #[serde(default)]
    pub pattern_dialect: PatternDialect,
    #[serde(default = "default_rules")]
    pub rules: BTreeMap<String, RuleSetting>,
}

fn default_ignores() -> Vec<String> {
    ["**/dist/**", "**/build/**"].map(String::from).to_vec()
}

fn default_rules() -> BTreeMap<String, RuleSetting> {
    RuleName::all()
        .into_iter()
        .map(|rule| (rule.to_string(), RuleSetting::Level(RuleLevel::Error)))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: default_ignores(),
            ecma_version: EcmaVersion::default(),
            pattern_dialect: PatternDialect::default(),
            rules: default_rules(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, unknown rule names, and
    /// rule settings the rule cannot accept.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are treated as literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        for (name, setting) in &self.rules {
            let rule: RuleName = name
                .parse()
                .with_context(|| format!("Unknown rule in 'rules': \"{}\"", name))?;
            setting.level(rule)?;
        }

        Ok(())
    }

    /// Level for a rule; rules absent from the table run as errors.
    pub fn rule_level(&self, rule: RuleName) -> Result<RuleLevel> {
        match self.rules.get(rule.as_str()) {
            Some(setting) => setting.level(rule),
            None => Ok(RuleLevel::Error),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
