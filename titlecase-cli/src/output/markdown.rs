//! Markdown output formatter

use super::{OutputFormatter, TitleReport};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs results as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    title_count: usize,
    invalid_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            title_count: 0,
            invalid_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &TitleReport) -> Result<()> {
        self.title_count += 1;

        if report.result.is_valid() {
            writeln!(
                self.writer,
                "{}. **{}** (`{}`): valid",
                self.title_count, report.title, report.source
            )?;
        } else {
            self.invalid_count += 1;
            writeln!(
                self.writer,
                "{}. **{}** (`{}`): invalid",
                self.title_count, report.title, report.source
            )?;
            for error in report.result.errors() {
                writeln!(self.writer, "   - {error}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Titles checked: {}, invalid: {}*",
            self.title_count, self.invalid_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use titlecase_core::TitleChecker;

    #[test]
    fn test_markdown_report() {
        let checker = TitleChecker::new().unwrap();
        let mut formatter = MarkdownFormatter::new(Vec::new());
        for title in ["A Study of Urban Development", "Reading Of Writing"] {
            formatter
                .format_report(&TitleReport {
                    source: "titles.txt".into(),
                    title: title.into(),
                    result: checker.check_title(title),
                })
                .unwrap();
        }
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert!(output.contains("1. **A Study of Urban Development** (`titles.txt`): valid"));
        assert!(output.contains("2. **Reading Of Writing** (`titles.txt`): invalid"));
        assert!(output.contains("   - Word 'Of' should not be capitalized."));
        assert!(output.ends_with("---\n*Titles checked: 2, invalid: 1*\n"));
    }
}
