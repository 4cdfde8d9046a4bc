//! CLI command implementations

use crate::CliResult;
use clap::Subcommand;

pub mod analyze;
pub mod generate_config;
pub mod list;
pub mod transform;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze NER errors over code-mixed corpora
    Analyze(analyze::AnalyzeArgs),

    /// Rewrite table text into dialect variants as JSONL
    Transform(transform::TransformArgs),

    /// Validate a dialect or lexicon configuration file
    Validate(validate::ValidateArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded dialect rule sets
    Dialects,

    /// List embedded entity lexicons
    Lexicons,

    /// List error metrics by number
    Metrics,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Transform(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Dialects,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Dialects"));
    }

    #[test]
    fn test_list_commands_variants() {
        let debug_str = format!("{:?}", ListCommands::Lexicons);
        assert!(debug_str.contains("Lexicons"));

        let debug_str = format!("{:?}", ListCommands::Metrics);
        assert!(debug_str.contains("Metrics"));
    }

    #[test]
    fn test_list_commands_completeness() {
        for subcommand in [
            ListCommands::Dialects,
            ListCommands::Lexicons,
            ListCommands::Metrics,
        ] {
            match subcommand {
                ListCommands::Dialects | ListCommands::Lexicons | ListCommands::Metrics => (),
            }
        }
    }
}
