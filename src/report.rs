//! Report sinks for check verdicts
//!
//! The text format is a line-oriented contract that tooling parses:
//!
//! ```text
//! ok   <name>
//! SKIP <name>
//! ERR  <name>: <message>
//! <N> succeeded, <N> skipped, <N> failed
//! ```

use serde::Serialize;
use std::io::Write;

use crate::errors::Result;
use crate::runner::RunSummary;
use crate::verdict::Verdict;

/// Receives each verdict as it is produced, then the final summary
pub trait Reporter {
    fn check(&mut self, name: &str, verdict: &Verdict) -> Result<()>;
    fn finish(&mut self, summary: &RunSummary) -> Result<()>;
}

/// Line-per-check text report. Always plain text, whatever the terminal.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for TextReport<W> {
    fn check(&mut self, name: &str, verdict: &Verdict) -> Result<()> {
        match verdict {
            Verdict::Pass => writeln!(self.out, "ok   {}", name)?,
            Verdict::Skip(_) => writeln!(self.out, "SKIP {}", name)?,
            Verdict::Fail(message) => writeln!(self.out, "ERR  {}: {}", name, message)?,
        }
        // A duplicated process must not inherit unwritten lines.
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(self.out, "{}", summary)?;
        self.out.flush()?;
        Ok(())
    }
}

/// One check as recorded in the JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub name: String,
    pub verdict: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Outcome {
    pub fn new(name: &str, verdict: &Verdict) -> Self {
        let (tag, message) = match verdict {
            Verdict::Pass => ("pass", None),
            Verdict::Skip(reason) => ("skip", Some(reason.clone())),
            Verdict::Fail(message) => ("fail", Some(message.clone())),
        };
        Self {
            name: name.to_string(),
            verdict: tag,
            message,
        }
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    checks: &'a [Outcome],
    summary: &'a RunSummary,
}

/// Collects outcomes and writes a single JSON document when the run finishes
pub struct JsonReport<W: Write> {
    out: W,
    outcomes: Vec<Outcome>,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            outcomes: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}

impl<W: Write> Reporter for JsonReport<W> {
    fn check(&mut self, name: &str, verdict: &Verdict) -> Result<()> {
        self.outcomes.push(Outcome::new(name, verdict));
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        let document = JsonDocument {
            checks: &self.outcomes,
            summary,
        };
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
