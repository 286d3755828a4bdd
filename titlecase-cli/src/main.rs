//! `titlecase` command-line entry point

use clap::Parser;
use std::process::ExitCode;
use titlecase_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    match cli.execute() {
        Ok(status) => status.into(),
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
