//! Generate rules command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use titlecase_core::rules::EMBEDDED_APA7;

/// Arguments for the generate-rules command
#[derive(Debug, Args)]
pub struct GenerateRulesArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

impl GenerateRulesArgs {
    /// Execute the generate-rules command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists, pass --force to overwrite it",
                self.output.display()
            );
        }

        println!("Writing APA 7 style rules template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, EMBEDDED_APA7)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rules template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the minor word lists or punctuation sets");
        println!("2. Validate your rules:");
        println!(
            "   titlecase validate-rules --rules-config {}",
            self.output.display()
        );
        println!("3. Use them for checking:");
        println!(
            "   titlecase check -i titles.txt --rules {}",
            self.output.display()
        );

        Ok(())
    }
}
