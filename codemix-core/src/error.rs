//! Error types shared across the analysis primitives

use thiserror::Error;

/// Errors raised while parsing an annotated corpus
#[derive(Error, Debug)]
pub enum ParseError {
    /// A row did not split into the expected three tab-separated fields
    #[error("malformed row at line {line}: expected 3 tab-separated fields, found {found}")]
    MalformedRow {
        /// 1-based line number of the offending row
        line: usize,
        /// Number of fields the row actually split into
        found: usize,
    },

    /// I/O error while reading corpus data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading lexicon or dialect configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read configuration file {path}: {error}")]
    FileRead {
        /// The configuration file path
        path: String,
        /// The underlying I/O failure
        error: String,
    },

    /// Configuration is not valid TOML for the expected schema
    #[error("invalid configuration syntax: {0}")]
    Syntax(String),

    /// Requested name is not in the built-in registry
    #[error("unknown dialect '{name}'")]
    UnknownDialect {
        /// The dialect name that was requested
        name: String,
    },

    /// Requested name is not in the built-in registry
    #[error("unknown lexicon '{name}'")]
    UnknownLexicon {
        /// The lexicon name that was requested
        name: String,
    },

    /// A rewrite rule pattern failed to compile
    #[error("invalid rule pattern '{pattern}': {error}")]
    InvalidPattern {
        /// The pattern source text
        pattern: String,
        /// The regex compilation failure
        error: String,
    },

    /// Configuration parsed but failed semantic validation
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// What the validation found
        reason: String,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Syntax(err.to_string())
    }
}

/// Errors raised during error-metric computation
#[derive(Error, Debug)]
pub enum MetricError {
    /// No sentence contributed to the metric's denominator
    #[error("empty denominator: no sentence contributed to {metric}")]
    EmptyDenominator {
        /// Human-readable name of the metric being computed
        metric: String,
    },
}

/// Result type for corpus parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
