//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Transformation configuration
    #[serde(default)]
    pub transform: TransformConfig,
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Lexicon used when the first language dominates
    pub l1_lexicon: String,

    /// Lexicon used when the second language dominates
    pub l2_lexicon: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            l1_lexicon: "english".to_string(),
            l2_lexicon: "spanish".to_string(),
        }
    }
}

/// Transformation-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct TransformConfig {
    /// Table column holding the source text
    pub column: String,

    /// Maximum rows taken per run (0 = no limit)
    pub limit: usize,

    /// Dialect names or rule-set files (empty = all embedded dialects)
    pub dialects: Vec<String>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            column: "comment".to_string(),
            limit: 500,
            dialects: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}
