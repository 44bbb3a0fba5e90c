//! `action-docs` - README generator for GitHub Actions.
//!
//! # Examples
//!
//! ```bash
//! # Generate ./README.md from ./action.yaml
//! action-docs generate --repository-url octo/greeter
//!
//! # Check the descriptor and inputs only
//! action-docs validate --action-path ./action.yml
//!
//! # Shell completions
//! action-docs completions zsh > ~/.zfunc/_action-docs
//! ```

use action_docs_cli::Cli;
use action_docs_cli::runner::{execute_command, exit_code_for, init_logging, report_failure};
use action_docs_core::cli::{ExitCode, OutputFormat};
use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() {
    let in_workflow = std::env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true");

    let code = match run().await {
        Ok(code) => code,
        Err(err) => {
            report_failure(&err, in_workflow);
            exit_code_for(&err)
        }
    };

    std::process::exit(code.as_i32());
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = cli.format.parse::<OutputFormat>()?;

    execute_command(cli.command, output_format).await
}
