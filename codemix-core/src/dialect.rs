//! Dialect transformation seam and the built-in rule engine
//!
//! A dialect variant is an ordered list of regex rewrite rules applied
//! sequentially over a sentence. A rule fires when its application changes
//! the text; the identifiers of fired rules travel with the rewritten
//! sentence so downstream records can report which transformations ran.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Rewrites a sentence and reports which rules fired.
pub trait DialectTransformer {
    /// Name of the dialect variant
    fn name(&self) -> &str;

    /// Transforms `text`, recording every rule that changed it.
    fn transform(&self, text: &str) -> Transformation;
}

/// Outcome of one transformer call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    /// Rewritten sentence
    pub text: String,
    /// Identifiers of the rules that fired, in application order
    pub applied: Vec<String>,
}

/// One line of the transformation pipeline's output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialectRecord {
    /// Transformed sentence text
    pub text: String,
    /// Distinct identifiers of the rules that fired, sorted
    pub rules: BTreeSet<String>,
}

impl From<Transformation> for DialectRecord {
    fn from(transformation: Transformation) -> Self {
        Self {
            text: transformation.text,
            rules: transformation.applied.into_iter().collect(),
        }
    }
}

/// Schema of a dialect rule-set TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectConfig {
    /// Identification block
    pub metadata: DialectMetadata,
    /// Rewrite rules, applied in file order
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Dialect identification
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectMetadata {
    /// Registry name, also the default output file stem
    pub name: String,
    /// Human-readable description
    pub description: String,
}

/// One rewrite rule
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Rule-type identifier recorded when the rule fires; identifiers may
    /// repeat across rules of the same type
    pub kind: String,
    /// Regex matched against the whole sentence
    pub pattern: String,
    /// Replacement text, `$n` referring to capture groups
    pub replacement: String,
}

impl DialectConfig {
    /// Loads and validates a rule set from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config: DialectConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Semantic checks beyond the TOML schema, pattern compilation included.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.metadata.name.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "dialect metadata.name is empty".to_string(),
            });
        }
        if self.rules.is_empty() {
            return Err(ConfigError::Invalid {
                reason: format!("dialect '{}' has no rules", self.metadata.name),
            });
        }
        let mut seen = BTreeSet::new();
        for rule in &self.rules {
            if rule.kind.is_empty() {
                return Err(ConfigError::Invalid {
                    reason: format!("rule with pattern '{}' has an empty kind", rule.pattern),
                });
            }
            Regex::new(&rule.pattern).map_err(|e| ConfigError::InvalidPattern {
                pattern: rule.pattern.clone(),
                error: e.to_string(),
            })?;
            if !seen.insert((rule.kind.as_str(), rule.pattern.as_str())) {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "duplicate rule: kind '{}' with pattern '{}'",
                        rule.kind, rule.pattern
                    ),
                });
            }
        }
        Ok(())
    }
}

macro_rules! embed_dialect {
    ($name:expr, $path:expr) => {
        ($name, include_str!($path))
    };
}

static DIALECTS: OnceLock<HashMap<String, DialectConfig>> = OnceLock::new();

fn load_embedded_dialects() -> ConfigResult<HashMap<String, DialectConfig>> {
    let mut configs = HashMap::new();

    let embedded = [
        embed_dialect!("aave", "../configs/dialects/aave.toml"),
        embed_dialect!("nigerian", "../configs/dialects/nigerian.toml"),
        embed_dialect!("indian", "../configs/dialects/indian.toml"),
        embed_dialect!("singlish", "../configs/dialects/singlish.toml"),
    ];

    for (name, toml_content) in embedded {
        let config: DialectConfig = toml::from_str(toml_content)
            .map_err(|e| ConfigError::Syntax(format!("embedded dialect {name}: {e}")))?;
        config.validate()?;
        if config.metadata.name != name {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "embedded dialect name mismatch: expected {}, got {}",
                    name, config.metadata.name
                ),
            });
        }
        configs.insert(name.to_string(), config);
    }

    Ok(configs)
}

fn dialect_registry() -> &'static HashMap<String, DialectConfig> {
    DIALECTS.get_or_init(|| load_embedded_dialects().expect("failed to load embedded dialects"))
}

/// Returns the embedded dialect registered under `name`.
pub fn embedded_dialect(name: &str) -> ConfigResult<&'static DialectConfig> {
    dialect_registry()
        .get(name)
        .ok_or_else(|| ConfigError::UnknownDialect {
            name: name.to_string(),
        })
}

/// Names of all embedded dialects, sorted.
pub fn list_embedded_dialects() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = dialect_registry().keys().map(|s| s.as_str()).collect();
    names.sort_unstable();
    names
}

/// Regex rule-set transformer built from a [`DialectConfig`]
#[derive(Debug, Clone)]
pub struct RuleDialect {
    name: String,
    rules: Vec<CompiledRule>,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    kind: String,
    pattern: Regex,
    replacement: String,
}

impl RuleDialect {
    /// Compiles a rule set; fails on the first invalid pattern.
    pub fn new(config: &DialectConfig) -> ConfigResult<Self> {
        config.validate()?;
        let rules = config
            .rules
            .iter()
            .map(|rule| {
                let pattern =
                    Regex::new(&rule.pattern).map_err(|e| ConfigError::InvalidPattern {
                        pattern: rule.pattern.clone(),
                        error: e.to_string(),
                    })?;
                Ok(CompiledRule {
                    kind: rule.kind.clone(),
                    pattern,
                    replacement: rule.replacement.clone(),
                })
            })
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(Self {
            name: config.metadata.name.clone(),
            rules,
        })
    }

    /// Builds a transformer from an embedded dialect name.
    pub fn builtin(name: &str) -> ConfigResult<Self> {
        embedded_dialect(name).and_then(Self::new)
    }

    /// Builds a transformer from a rule-set TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        DialectConfig::from_file(path).and_then(|config| Self::new(&config))
    }
}

impl DialectTransformer for RuleDialect {
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self, text: &str) -> Transformation {
        let mut current = text.to_string();
        let mut applied = Vec::new();
        for rule in &self.rules {
            let rewritten = rule
                .pattern
                .replace_all(&current, rule.replacement.as_str())
                .into_owned();
            if rewritten != current {
                applied.push(rule.kind.clone());
                current = rewritten;
            }
        }
        Transformation {
            text: current,
            applied,
        }
    }
}
