//! JSON output formatter

use super::{OutputFormatter, TitleReport};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    results: Vec<ResultData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultData {
    /// Where the title came from
    pub source: String,
    /// The title as checked
    pub title: String,
    pub is_valid: bool,
    /// Error messages in discovery order
    pub errors: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            results: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &TitleReport) -> Result<()> {
        self.results.push(ResultData {
            source: report.source.clone(),
            title: report.title.clone(),
            is_valid: report.result.is_valid(),
            errors: report.result.errors().to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.results)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.results)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use titlecase_core::TitleChecker;

    #[test]
    fn test_json_shape() {
        let checker = TitleChecker::new().unwrap();
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_report(&TitleReport {
                source: "item-1".into(),
                title: "the Wrong Capitalization".into(),
                result: checker.check_title("the Wrong Capitalization"),
            })
            .unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<ResultData> = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].source, "item-1");
        assert!(!parsed[0].is_valid);
        assert_eq!(parsed[0].errors, vec!["Word 'the' should be capitalized."]);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
