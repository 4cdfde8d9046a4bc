//! Transform command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader, TsvTable};
use crate::output::JsonlWriter;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use codemix_core::dialect::list_embedded_dialects;
use codemix_core::{DialectRecord, DialectTransformer, RuleDialect};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Arguments for the transform command
#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Input table files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Table column holding the source text
    #[arg(short, long, value_name = "NAME")]
    pub column: Option<String>,

    /// Dialect name or rule-set TOML file (repeatable; default: all embedded)
    #[arg(short, long, value_name = "NAME/FILE")]
    pub dialect: Vec<String>,

    /// Output directory for JSONL files
    #[arg(short, long, value_name = "DIR", default_value = "dialect-output")]
    pub output: PathBuf,

    /// Maximum rows taken per run (0 = no limit)
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TransformArgs {
    /// Execute the transform command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting dialect transformation");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let column = self
            .column
            .as_deref()
            .unwrap_or(&config.transform.column);
        let limit = self.limit.unwrap_or(config.transform.limit);

        let dialects = self.load_dialects(&config)?;
        let texts = self.read_texts(column, limit)?;
        log::info!(
            "Transforming {} rows into {} dialects",
            texts.len(),
            dialects.len()
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_items((texts.len() * dialects.len()) as u64, "rows");

        std::fs::create_dir_all(&self.output).with_context(|| {
            format!("Failed to create output directory: {}", self.output.display())
        })?;

        for dialect in &dialects {
            progress.set_stage(&format!("working on {}", dialect.name()));
            log::info!("working on {} ...", dialect.name());

            let mut records = Vec::with_capacity(texts.len());
            for text in &texts {
                records.push(DialectRecord::from(dialect.transform(text)));
                progress.item_completed();
            }

            let path = self.output.join(format!("{}.jsonl", dialect.name()));
            write_records(&path, &records)?;
            log::info!("Wrote {} records to {}", records.len(), path.display());
        }
        progress.finish();

        for dialect in &dialects {
            let path = self.output.join(format!("{}.jsonl", dialect.name()));
            println!("✓ {}: {} records -> {}", dialect.name(), texts.len(), path.display());
        }

        Ok(())
    }

    /// Column values concatenated across every resolved input file
    fn read_texts(&self, column: &str, limit: usize) -> Result<Vec<String>> {
        let files = resolve_patterns(&self.input)?;

        let mut texts = Vec::new();
        for file in &files {
            let table = TsvTable::parse(&FileReader::read_text(file)?)
                .with_context(|| format!("Failed to parse table: {}", file.display()))?;

            let values = table
                .column(column)
                .with_context(|| format!("In table: {}", file.display()))?;
            texts.extend(values.into_iter().map(|v| v.to_string()));
        }

        if limit > 0 {
            texts.truncate(limit);
        }
        Ok(texts)
    }

    /// Requested dialects: flags, then configuration, then every embedded one
    fn load_dialects(&self, config: &CliConfig) -> Result<Vec<RuleDialect>> {
        let specs: Vec<String> = if !self.dialect.is_empty() {
            self.dialect.clone()
        } else if !config.transform.dialects.is_empty() {
            config.transform.dialects.clone()
        } else {
            list_embedded_dialects()
                .into_iter()
                .map(|name| name.to_string())
                .collect()
        };

        specs.iter().map(|spec| load_dialect(spec)).collect()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

/// Write one JSONL file in a single pass
fn write_records(path: &Path, records: &[DialectRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    let mut writer = JsonlWriter::new(BufWriter::new(file));
    for record in records {
        writer.write_record(record)?;
    }
    writer.finish()
}

/// Load a dialect by embedded name or rule-set TOML file path
fn load_dialect(spec: &str) -> Result<RuleDialect> {
    let path = Path::new(spec);
    if spec.ends_with(".toml") || path.is_file() {
        Ok(RuleDialect::from_file(path)?)
    } else {
        Ok(RuleDialect::builtin(spec)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>, dialect: Vec<String>, limit: Option<usize>) -> TransformArgs {
        TransformArgs {
            input,
            column: None,
            dialect,
            output: PathBuf::from("dialect-output"),
            limit,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_load_dialects_defaults_to_all_embedded() {
        let args = args(vec!["in.tsv".to_string()], vec![], None);
        let dialects = args.load_dialects(&CliConfig::default()).unwrap();
        let names: Vec<&str> = dialects.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["aave", "indian", "nigerian", "singlish"]);
    }

    #[test]
    fn test_load_dialects_flag_overrides_config() {
        let config = CliConfig {
            transform: crate::config::TransformConfig {
                dialects: vec!["nigerian".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };

        let args = args(vec!["in.tsv".to_string()], vec!["aave".to_string()], None);
        let dialects = args.load_dialects(&config).unwrap();
        assert_eq!(dialects.len(), 1);
        assert_eq!(dialects[0].name(), "aave");
    }

    #[test]
    fn test_load_dialect_unknown_name() {
        assert!(load_dialect("martian").is_err());
    }

    #[test]
    fn test_read_texts_applies_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.tsv");
        fs::write(&path, "comment\none\ntwo\nthree\n").unwrap();

        let args = args(vec![path.to_string_lossy().to_string()], vec![], None);
        assert_eq!(args.read_texts("comment", 2).unwrap(), vec!["one", "two"]);
        assert_eq!(args.read_texts("comment", 0).unwrap().len(), 3);
    }

    #[test]
    fn test_read_texts_missing_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.tsv");
        fs::write(&path, "id\tcomment\n1\thola\n").unwrap();

        let args = args(vec![path.to_string_lossy().to_string()], vec![], None);
        let err = args.read_texts("text", 0).unwrap_err();
        assert!(format!("{:#}", err).contains("Column not found: text"));
    }

    #[test]
    fn test_write_records_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.jsonl");

        let dialect = RuleDialect::builtin("singlish").unwrap();
        let records = vec![DialectRecord::from(dialect.transform("it is done."))];
        write_records(&path, &records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert!(value["text"].is_string());
        assert!(value["rules"].is_array());
    }
}
