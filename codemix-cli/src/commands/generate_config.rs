//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Configuration template kinds
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TemplateKind {
    /// Dialect rule-set template
    Dialect,
    /// Entity lexicon template
    Lexicon,
}

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Kind of configuration to generate
    #[arg(short, long, value_enum, required = true)]
    pub kind: TemplateKind,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Kind: {:?}", self.kind);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize it");
        println!("2. Validate your configuration:");
        match self.kind {
            TemplateKind::Dialect => {
                println!("   codemix validate --dialect {}", self.output.display());
                println!("3. Use it for transformation:");
                println!(
                    "   codemix transform -i data.tsv -d {}",
                    self.output.display()
                );
            }
            TemplateKind::Lexicon => {
                println!("   codemix validate --lexicon {}", self.output.display());
                println!("3. Use it for analysis:");
                println!(
                    "   codemix analyze -i corpus.txt --l2-lexicon {}",
                    self.output.display()
                );
            }
        }

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        match self.kind {
            TemplateKind::Dialect => DIALECT_TEMPLATE.to_string(),
            TemplateKind::Lexicon => LEXICON_TEMPLATE.to_string(),
        }
    }
}

const DIALECT_TEMPLATE: &str = r#"# Dialect rule set
#
# Rules apply top to bottom over the whole sentence. A rule "fires" when
# its pattern changes the text; fired rule kinds are recorded in the
# JSONL output. Patterns use Rust regex syntax (no lookarounds).

[metadata]
name = "custom"
description = "Describe the dialect here"

[[rules]]
kind = "example_rule"
pattern = "\\bvery (\\w+)\\b"
replacement = "$1 $1"

# Add more rules as needed:
# [[rules]]
# kind = "g_dropping"
# pattern = "(\\w)ing\\b"
# replacement = "${1}in'"
"#;

const LEXICON_TEMPLATE: &str = r#"# Entity lexicon
#
# The gazetteer lists known entity phrases, matched case-insensitively.
# Capitalized-run detection tags unknown capitalized words outside
# sentence-initial position; stopwords are never tagged.

[metadata]
code = "xx"
name = "custom"

[gazetteer]
entries = [
    "New York",
    "Barack Obama",
]

[heuristics]
capitalized_runs = true
stopwords = [
    "the",
    "a",
    "i",
]
"#;
