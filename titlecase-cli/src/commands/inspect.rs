//! Inspect command implementation

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use titlecase_core::{SpaceReport, TitleChecker, Token};

use super::{CheckStatus, RulesArgs};

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Title to inspect, quoted to keep its spacing
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Also show the tokens the capitalization rules see
    #[arg(long)]
    pub tokens: bool,

    #[command(flatten)]
    pub rules: RulesArgs,
}

/// Combined diagnostics for one title
#[derive(Debug, Serialize)]
struct Inspection {
    spacing: SpaceReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<Token>>,
    errors: Vec<String>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<CheckStatus> {
        let checker = self.rules.build_checker()?;
        let inspection = self.inspect(&checker);

        let json = serde_json::to_string_pretty(&inspection)
            .context("Failed to serialize inspection")?;
        println!("{json}");

        Ok(CheckStatus::Clean)
    }

    fn inspect(&self, checker: &TitleChecker) -> Inspection {
        Inspection {
            spacing: checker.inspect(&self.title),
            tokens: self
                .tokens
                .then(|| checker.tokenize(&self.title).into_vec()),
            errors: checker.check_title(&self.title).errors().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(title: &str, tokens: bool) -> InspectArgs {
        InspectArgs {
            title: title.to_string(),
            tokens,
            rules: RulesArgs::default(),
        }
    }

    #[test]
    fn test_inspect_spacing_only() {
        let checker = TitleChecker::new().unwrap();
        let inspection = args(" A  Title", false).inspect(&checker);

        assert!(inspection.spacing.has_leading_space);
        assert_eq!(inspection.spacing.extra_space_indices, vec![0, 2]);
        assert!(inspection.tokens.is_none());
        assert_eq!(
            inspection.errors,
            vec!["Extra space in leading, trailing, or in the middle."]
        );

        let json = serde_json::to_value(&inspection).unwrap();
        assert!(json.get("tokens").is_none());
        assert_eq!(json["spacing"]["space_count"], 3);
    }

    #[test]
    fn test_inspect_with_tokens() {
        let checker = TitleChecker::new().unwrap();
        let inspection = args("Results: A Look", true).inspect(&checker);

        let tokens = inspection.tokens.unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].text, ":");
        assert!(inspection.errors.is_empty());
    }

    #[test]
    fn test_execute_reports_clean_status() {
        assert_eq!(
            args("the Wrong Capitalization", true).execute().unwrap(),
            CheckStatus::Clean
        );
    }
}
