//! Tab-separated table reading

use crate::error::CliError;
use anyhow::{bail, Result};

/// In-memory tab-separated table with a header row
#[derive(Debug)]
pub struct TsvTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TsvTable {
    /// Parse text whose first line names the columns.
    ///
    /// Fields are split on plain tabs, no quoting. Blank lines are
    /// skipped; a row with the wrong field count is an error.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));

        let header_line = match lines.next() {
            Some(line) if !line.trim().is_empty() => line,
            _ => bail!("Table has no header row"),
        };
        let header: Vec<String> = header_line.split('\t').map(|s| s.to_string()).collect();

        let mut rows = Vec::new();
        for (index, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<String> = line.split('\t').map(|s| s.to_string()).collect();
            if fields.len() != header.len() {
                // header is line 1, data starts at line 2
                bail!(
                    "Row {} has {} fields, expected {}",
                    index + 2,
                    fields.len(),
                    header.len()
                );
            }
            rows.push(fields);
        }

        Ok(Self { header, rows })
    }

    /// Column names in file order
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the named column, top to bottom
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let index = self
            .header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CliError::ColumnNotFound(name.to_string()))?;

        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}
