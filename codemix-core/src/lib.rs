//! Code-switching NER error analysis and dialect transformation
//!
//! Two batch pipelines share this crate. The analysis pipeline parses a
//! token-per-line annotated corpus, routes each code-mixed sentence to the
//! entity tagger of its dominant language, aligns the tagger's mentions
//! against the gold tokens, and computes ratio-based error metrics over
//! the aligned results. The transformation pipeline rewrites raw sentences
//! with per-dialect rule sets and reports which rules fired.
//!
//! # Quick start
//!
//! ```
//! use codemix_core::{Corpus, CorpusProcessor, MetricKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let corpus: Corpus = "# sent_enum = 1
//! el\tlang2\tO
//! gato\tlang2\tO
//! runs\tlang1\tO
//!
//! "
//! .parse()?;
//!
//! let processor = CorpusProcessor::with_defaults()?;
//! let results = processor.process(&corpus);
//! assert_eq!(results.len(), 1);
//!
//! let report = MetricKind::InsertionFalsePositiveRate.compute(&results)?;
//! assert_eq!(report.ratio(), 0.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod align;
pub mod classify;
pub mod corpus;
pub mod dialect;
pub mod error;
pub mod metrics;
pub mod processor;
pub mod tagger;

pub use align::{EntityLabel, TaggingResult};
pub use classify::{dominant_tag, Dominant};
pub use corpus::{Corpus, LangTag, Sentence, Token};
pub use dialect::{DialectConfig, DialectRecord, DialectTransformer, RuleDialect, Transformation};
pub use error::{ConfigError, MetricError, ParseError};
pub use metrics::{MetricKind, MetricReport};
pub use processor::{CorpusProcessor, CorpusProcessorBuilder};
pub use tagger::{EntityTagger, LexiconConfig, LexiconTagger};
