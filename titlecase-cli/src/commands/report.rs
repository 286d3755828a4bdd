//! Shared checking and reporting for commands that validate titles

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use titlecase_core::TitleChecker;

use super::{build_checker, CheckStatus};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::TitleInput;
use crate::output::{create_formatter, OutputFormat, TitleReport};

/// Output and processing options
#[derive(Debug, Args, Default)]
pub struct ReportArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Style rules file (default: built-in APA 7 rules)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Check titles in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel checking (implies --parallel)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Effective settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub pretty_json: bool,
    pub rules: Option<PathBuf>,
    /// `Some(n)` to check in parallel on `n` threads
    pub threads: Option<usize>,
    pub output: Option<PathBuf>,
}

impl ReportArgs {
    /// Merge command-line flags over the optional config file
    pub fn settings(&self) -> Result<Settings> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
            })?,
        };

        if self.threads == Some(0) {
            return Err(CliError::ConfigError("threads must be greater than 0".into()).into());
        }

        let parallel = self.parallel || self.threads.is_some() || config.processing.parallel;
        let threads = if parallel {
            Some(
                self.threads
                    .or((config.processing.threads > 0).then_some(config.processing.threads))
                    .unwrap_or_else(num_cpus::get),
            )
        } else {
            None
        };

        Ok(Settings {
            format,
            pretty_json: config.output.pretty_json,
            rules: self.rules.clone().or(config.processing.rules),
            threads,
            output: self.output.clone(),
        })
    }
}

/// Check every title and write the reports
pub fn check_and_report(titles: Vec<TitleInput>, settings: &Settings) -> Result<CheckStatus> {
    let checker = build_checker(settings.rules.as_ref())?;
    let reports = check_all(&checker, &titles, settings.threads)?;

    let invalid = reports.iter().filter(|r| !r.result.is_valid()).count();
    log::info!("Checked {} title(s), {invalid} invalid", reports.len());

    write_reports(&reports, settings)?;

    Ok(if invalid == 0 {
        CheckStatus::Clean
    } else {
        CheckStatus::Violations
    })
}

/// Check titles, in parallel when `threads` is set. Output order always
/// matches input order.
pub fn check_all(
    checker: &TitleChecker,
    titles: &[TitleInput],
    threads: Option<usize>,
) -> Result<Vec<TitleReport>> {
    let texts: Vec<&str> = titles.iter().map(|input| input.title.as_str()).collect();

    let results = match threads {
        Some(threads) => {
            log::debug!("Checking {} titles on {threads} threads", texts.len());
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| checker.check_titles_parallel(&texts))
        }
        None => checker.check_titles(texts.iter().copied()),
    };

    Ok(titles
        .iter()
        .zip(results)
        .map(|(input, result)| TitleReport {
            source: input.source.clone(),
            title: input.title.clone(),
            result,
        })
        .collect())
}

fn write_reports(reports: &[TitleReport], settings: &Settings) -> Result<()> {
    let writer: Box<dyn Write + Send + Sync> = match &settings.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout()),
    };

    let mut formatter = create_formatter(settings.format, writer, settings.pretty_json);
    for report in reports {
        formatter.format_report(report)?;
    }
    formatter.finish()
}
