//! Check command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, IsTerminal};

use super::report::{check_and_report, ReportArgs};
use super::CheckStatus;
use crate::input::{resolve_patterns, FileReader, TitleInput};
use crate::progress::TitleProgress;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Titles to check
    #[arg(value_name = "TITLE")]
    pub titles: Vec<String>,

    /// Files or patterns with one title per line (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    #[command(flatten)]
    pub report: ReportArgs,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, quiet: bool) -> Result<CheckStatus> {
        log::debug!("Arguments: {self:?}");

        let settings = self.report.settings()?;
        let titles = self.collect_titles(quiet)?;

        if titles.is_empty() {
            log::warn!("No titles to check");
            return Ok(CheckStatus::Clean);
        }

        check_and_report(titles, &settings)
    }

    /// Gather titles from arguments, then files; stdin when neither is given
    fn collect_titles(&self, quiet: bool) -> Result<Vec<TitleInput>> {
        let mut titles: Vec<TitleInput> = self
            .titles
            .iter()
            .enumerate()
            .map(|(i, title)| TitleInput::new(format!("arg {}", i + 1), title.as_str()))
            .collect();

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Reading titles from {} file(s)", files.len());

            let mut progress = TitleProgress::start(files.len(), quiet);
            for file in &files {
                let read = FileReader::read_titles(file)?;
                progress.file_read(file, read.len());
                titles.extend(read);
            }
            progress.finish();
        }

        if self.titles.is_empty() && self.input.is_empty() {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                log::info!("Reading titles from stdin, one per line");
            }
            titles = FileReader::read_titles_from(stdin.lock(), "stdin")?;
        }

        Ok(titles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(titles: &[&str], input: Vec<String>) -> CheckArgs {
        CheckArgs {
            titles: titles.iter().map(|t| t.to_string()).collect(),
            input,
            report: ReportArgs::default(),
        }
    }

    #[test]
    fn test_collect_arguments_then_files() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("titles.txt");
        fs::write(&file, "From A File\n").unwrap();

        let titles = args(
            &["First Title", " Second Title"],
            vec![file.display().to_string()],
        )
        .collect_titles(true)
        .unwrap();

        assert_eq!(titles.len(), 3);
        assert_eq!(titles[0], TitleInput::new("arg 1", "First Title"));
        assert_eq!(titles[1], TitleInput::new("arg 2", " Second Title"));
        assert_eq!(titles[2].title, "From A File");
        assert!(titles[2].source.ends_with("titles.txt:1"));
    }

    #[test]
    fn test_missing_input_file() {
        let err = args(&[], vec!["/nonexistent/titles-*.txt".to_string()])
            .collect_titles(true)
            .unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_execute_status_and_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.txt");

        let mut clean = args(&["A Study of Urban Development"], Vec::new());
        clean.report.output = Some(output.clone());
        assert_eq!(clean.execute(true).unwrap(), CheckStatus::Clean);

        let mut dirty = args(&["the Wrong Capitalization"], Vec::new());
        dirty.report.output = Some(output.clone());
        assert_eq!(dirty.execute(true).unwrap(), CheckStatus::Violations);

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Word 'the' should be capitalized."));
    }
}
