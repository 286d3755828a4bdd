//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use titlecase_core::TitleChecker;

pub mod check;
pub mod generate_rules;
pub mod inspect;
pub mod records;
pub mod report;
pub mod validate;

use crate::output::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check titles given as arguments, in files, or on stdin
    Check(check::CheckArgs),

    /// Check the titles of items in a JSON metadata records file
    Records(records::RecordsArgs),

    /// Show spacing diagnostics and tokens for one title
    Inspect(inspect::InspectArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a style rules file
    ValidateRules(validate::ValidateArgs),

    /// Write the built-in APA 7 rules to a file as a starting template
    GenerateRules(generate_rules::GenerateRulesArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the minor words lowercased mid-title
    MinorWords(RulesArgs),

    /// List available output formats
    Formats,
}

/// Rules selection shared by commands that build a checker
#[derive(Debug, Args, Default)]
pub struct RulesArgs {
    /// Style rules file (default: built-in APA 7 rules)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

impl RulesArgs {
    /// Build a checker from the selected rules
    pub fn build_checker(&self) -> Result<TitleChecker> {
        build_checker(self.rules.as_ref())
    }
}

/// Build a checker from an optional rules file
pub fn build_checker(rules: Option<&PathBuf>) -> Result<TitleChecker> {
    let builder = TitleChecker::builder();
    let builder = match rules {
        Some(path) => {
            log::info!("Using style rules from {}", path.display());
            builder.rules_file(path)
        }
        None => builder,
    };
    Ok(builder.build()?)
}

/// Overall outcome of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Nothing to report, or every checked title is valid
    Clean,
    /// At least one checked title has violations
    Violations,
}

impl From<CheckStatus> for ExitCode {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Clean => ExitCode::SUCCESS,
            CheckStatus::Violations => ExitCode::from(1),
        }
    }
}

impl Commands {
    /// Execute the command
    pub fn execute(&self, quiet: bool) -> Result<CheckStatus> {
        match self {
            Commands::Check(args) => args.execute(quiet),
            Commands::Records(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute()?;
                Ok(CheckStatus::Clean)
            }
            Commands::ValidateRules(args) => {
                args.execute()?;
                Ok(CheckStatus::Clean)
            }
            Commands::GenerateRules(args) => {
                args.execute()?;
                Ok(CheckStatus::Clean)
            }
        }
    }
}

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::MinorWords(rules) => {
                let checker = rules.build_checker()?;
                for word in checker.rules().minor_words().words() {
                    println!("{word}");
                }
            }
            ListCommands::Formats => {
                for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
                    println!("{}", format.as_str());
                }
            }
        }
        Ok(())
    }
}
