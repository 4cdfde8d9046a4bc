//! File reading utilities

use anyhow::{Context, Result};
use codemix_core::Corpus;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Parse an annotated corpus file
    pub fn read_corpus(path: &Path) -> Result<Corpus> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

        let corpus = Corpus::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse corpus: {}", path.display()))?;

        Ok(corpus)
    }
}
