//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use titlecase_core::StyleRules;

/// Arguments for the validate-rules command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the style rules file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub rules_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate-rules command
    pub fn execute(&self) -> Result<()> {
        println!("Validating style rules: {}", self.rules_config.display());

        match StyleRules::from_file(&self.rules_config) {
            Ok(rules) => {
                println!("✓ Rules are valid!");
                println!("  Style code: {}", rules.code());
                println!("  Style name: {}", rules.name());
                println!("  Minor words: {}", rules.minor_words().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rules are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}
