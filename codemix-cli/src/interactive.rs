//! Interactive metric selection loop
//!
//! The analyze command drops into this loop when no metric flags are
//! given. One line is read per round; quitting, running all metrics and
//! the two rejection messages mirror the published analysis tool.

use anyhow::Result;
use codemix_core::{MetricKind, TaggingResult};
use std::io::{BufRead, Write};

/// Parsed form of one line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Run a single metric
    Metric(MetricKind),
    /// Run every metric in numeric order
    All,
    /// Leave the loop
    Quit,
    /// Integer outside the metric range
    OutOfRange,
    /// Not an integer at all
    Invalid,
}

/// Parse one line of metric-selection input.
///
/// Empty input and runs of `>` up to five characters quit. Anything
/// starting with `a` or `A` selects every metric.
pub fn parse_selection(line: &str) -> Selection {
    let trimmed = line.trim();

    if ">>>>>".contains(trimmed) {
        return Selection::Quit;
    }
    if trimmed.starts_with(['a', 'A']) {
        return Selection::All;
    }
    match trimmed.parse::<i64>() {
        Ok(n) if (1..=3).contains(&n) => match MetricKind::from_number(n as u8) {
            Some(kind) => Selection::Metric(kind),
            None => Selection::OutOfRange,
        },
        Ok(_) => Selection::OutOfRange,
        Err(_) => Selection::Invalid,
    }
}

/// The menu shown before each round of input
pub fn prompt() -> String {
    let mut text =
        String::from("Run an error analysis by number, \"all\" to run all, \">>\" to quit:\n");
    for kind in MetricKind::ALL {
        text.push_str(&format!("{}. {}\n", kind.number(), kind.description()));
    }
    text.push_str("Run: ");
    text
}

/// Run the selection loop over already-tagged results.
///
/// A metric with an empty denominator reports its error and the loop
/// continues.
pub fn run_session<R: BufRead, W: Write>(
    results: &[TaggingResult],
    mut input: R,
    mut output: W,
) -> Result<()> {
    let menu = prompt();
    loop {
        output.write_all(menu.as_bytes())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_selection(&line) {
            Selection::Quit => break,
            Selection::All => {
                for kind in MetricKind::ALL {
                    report_metric(kind, results, &mut output)?;
                }
            }
            Selection::Metric(kind) => report_metric(kind, results, &mut output)?,
            Selection::OutOfRange => writeln!(output, "Input out of range!")?,
            Selection::Invalid => writeln!(output, "Invalid input!")?,
        }
    }
    Ok(())
}

fn report_metric<W: Write>(
    kind: MetricKind,
    results: &[TaggingResult],
    output: &mut W,
) -> Result<()> {
    match kind.compute(results) {
        Ok(report) => writeln!(output, "{}", report.ratio())?,
        Err(e) => writeln!(output, "{}", e)?,
    }
    Ok(())
}
