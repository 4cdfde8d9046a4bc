//! Validate command implementation

use anyhow::Result;
use clap::Args;
use codemix_core::dialect::DialectConfig;
use codemix_core::tagger::LexiconConfig;
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to a dialect rule-set file to validate
    #[arg(short, long, value_name = "FILE")]
    pub dialect: Option<PathBuf>,

    /// Path to a lexicon file to validate
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        match (&self.dialect, &self.lexicon) {
            (Some(path), None) => validate_dialect(path),
            (None, Some(path)) => validate_lexicon(path),
            _ => anyhow::bail!("Provide exactly one of --dialect or --lexicon"),
        }
    }
}

fn validate_dialect(path: &Path) -> Result<()> {
    println!("Validating dialect rule set: {}", path.display());

    match DialectConfig::from_file(path) {
        Ok(config) => {
            println!("✓ Configuration is valid!");
            println!("  Dialect: {}", config.metadata.name);
            println!("  Rules: {}", config.rules.len());
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {e}");
            Err(anyhow::anyhow!("Validation failed: {}", e))
        }
    }
}

fn validate_lexicon(path: &Path) -> Result<()> {
    println!("Validating lexicon: {}", path.display());

    match LexiconConfig::from_file(path) {
        Ok(config) => {
            println!("✓ Configuration is valid!");
            println!("  Lexicon: {}", config.metadata.name);
            println!("  Language code: {}", config.metadata.code);
            println!("  Gazetteer entries: {}", config.gazetteer.entries.len());
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {e}");
            Err(anyhow::anyhow!("Validation failed: {}", e))
        }
    }
}
