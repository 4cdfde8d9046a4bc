//! List command implementation

use super::ListCommands;
use anyhow::Result;
use codemix_core::dialect::list_embedded_dialects;
use codemix_core::tagger::list_embedded_lexicons;
use codemix_core::MetricKind;

/// Execute a list subcommand
pub fn execute(subcommand: &ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Dialects => {
            for name in list_embedded_dialects() {
                println!("{}", name);
            }
        }
        ListCommands::Lexicons => {
            for name in list_embedded_lexicons() {
                println!("{}", name);
            }
        }
        ListCommands::Metrics => {
            for kind in MetricKind::ALL {
                println!("{}. {}", kind.number(), kind.description());
            }
        }
    }
    Ok(())
}
