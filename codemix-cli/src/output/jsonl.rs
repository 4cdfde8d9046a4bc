//! JSON Lines output writer

use anyhow::Result;
use codemix_core::DialectRecord;
use std::io::Write;

/// JSONL writer - one serialized record per line
pub struct JsonlWriter<W: Write> {
    writer: W,
    records: usize,
}

impl<W: Write> JsonlWriter<W> {
    /// Create a new JSONL writer
    pub fn new(writer: W) -> Self {
        Self { writer, records: 0 }
    }

    /// Serialize one record and terminate the line
    pub fn write_record(&mut self, record: &DialectRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        writeln!(self.writer)?;
        self.records += 1;
        Ok(())
    }

    /// Number of records written so far
    pub fn records_written(&self) -> usize {
        self.records
    }

    /// Flush buffered output
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
