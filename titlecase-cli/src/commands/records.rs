//! Records command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::report::{check_and_report, ReportArgs};
use super::CheckStatus;
use crate::input::{RecordSet, DEFAULT_TITLE_FIELD};

/// Arguments for the records command
#[derive(Debug, Args)]
pub struct RecordsArgs {
    /// JSON file holding an array of `{ identifier, metadata }` items
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only check the item with this identifier
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Metadata field holding the titles
    #[arg(long, value_name = "NAME", default_value = DEFAULT_TITLE_FIELD)]
    pub field: String,

    #[command(flatten)]
    pub report: ReportArgs,
}

impl RecordsArgs {
    /// Execute the records command
    pub fn execute(&self) -> Result<CheckStatus> {
        let settings = self.report.settings()?;
        let records = RecordSet::load(&self.file)?;
        log::info!(
            "Loaded {} record(s) from {}",
            records.len(),
            self.file.display()
        );

        let titles = records.titles(self.id.as_deref(), &self.field)?;
        if titles.is_empty() {
            log::warn!("No titles found in {}", self.file.display());
            return Ok(CheckStatus::Clean);
        }

        check_and_report(titles, &settings)
    }
}
