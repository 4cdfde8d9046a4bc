//! Analyze command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::interactive;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use codemix_core::tagger::LexiconTagger;
use codemix_core::{Corpus, CorpusProcessor, MetricKind, TaggingResult};
use std::path::{Path, PathBuf};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input corpus files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Metric number to compute (repeatable)
    #[arg(short, long, value_name = "NUMBER")]
    pub metric: Vec<u8>,

    /// Compute every metric
    #[arg(short, long, conflicts_with = "metric")]
    pub all: bool,

    /// Lexicon for the first-language route (name or TOML file)
    #[arg(long, value_name = "NAME/FILE")]
    pub l1_lexicon: Option<String>,

    /// Lexicon for the second-language route (name or TOML file)
    #[arg(long, value_name = "NAME/FILE")]
    pub l2_lexicon: Option<String>,

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

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting error analysis");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let l1_name = self
            .l1_lexicon
            .as_deref()
            .unwrap_or(&config.analysis.l1_lexicon);
        let l2_name = self
            .l2_lexicon
            .as_deref()
            .unwrap_or(&config.analysis.l2_lexicon);

        let processor = CorpusProcessor::builder()
            .l1_tagger(Box::new(load_lexicon(l1_name)?))
            .l2_tagger(Box::new(load_lexicon(l2_name)?))
            .build()?;

        let corpus = self.read_corpus()?;
        log::info!("Parsed {} sentences", corpus.len());

        let results = processor.process(&corpus);
        log::info!("Tagged {} code-mixed sentences", results.len());

        match self.selected_metrics()? {
            Some(kinds) => report_metrics(&kinds, &results),
            None => {
                let stdin = std::io::stdin();
                interactive::run_session(&results, stdin.lock(), std::io::stdout())
            }
        }
    }

    /// Read and concatenate every resolved input file
    fn read_corpus(&self) -> Result<Corpus> {
        let files = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_items(files.len() as u64, "files");

        let mut corpus = Corpus::default();
        for file in &files {
            corpus.extend(FileReader::read_corpus(file)?);
            progress.set_stage(&format!("read {}", file.display()));
            progress.item_completed();
        }
        progress.finish();

        Ok(corpus)
    }

    /// Metrics picked on the command line, `None` for interactive mode
    fn selected_metrics(&self) -> Result<Option<Vec<MetricKind>>> {
        if self.all {
            return Ok(Some(MetricKind::ALL.to_vec()));
        }
        if self.metric.is_empty() {
            return Ok(None);
        }

        let mut kinds = Vec::with_capacity(self.metric.len());
        for number in &self.metric {
            match MetricKind::from_number(*number) {
                Some(kind) => kinds.push(kind),
                None => anyhow::bail!("Metric number out of range: {}", number),
            }
        }
        Ok(Some(kinds))
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

/// Compute the selected metrics and print one ratio per line
fn report_metrics(kinds: &[MetricKind], results: &[TaggingResult]) -> Result<()> {
    for kind in kinds {
        let report = kind.compute(results)?;
        log::info!(
            "{}: {}/{}",
            kind.name(),
            report.numerator,
            report.denominator
        );
        println!("{}", report.ratio());
    }
    Ok(())
}

/// Load a lexicon by embedded name or TOML file path
fn load_lexicon(spec: &str) -> Result<LexiconTagger> {
    let path = Path::new(spec);
    if spec.ends_with(".toml") || path.is_file() {
        Ok(LexiconTagger::from_file(path)?)
    } else {
        Ok(LexiconTagger::builtin(spec)?)
    }
}
