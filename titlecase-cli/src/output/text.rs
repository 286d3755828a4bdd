//! Plain text output formatter

use super::{OutputFormatter, TitleReport};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs each title followed by its errors
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &TitleReport) -> Result<()> {
        writeln!(self.writer, "{}: \"{}\"", report.source, report.title)?;
        if report.result.is_valid() {
            writeln!(self.writer, "  ✓ Valid")?;
        } else {
            for error in report.result.errors() {
                writeln!(self.writer, "  ✗ {error}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
