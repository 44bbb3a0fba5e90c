//! Shell completion generation command.

use action_docs_core::cli::ExitCode;
use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};
use tracing::info;

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use action_docs_cli::commands::completions::write_completions;
/// use clap::Command;
/// use clap_complete::Shell;
///
/// let mut script = Vec::new();
/// write_completions(Shell::Bash, &mut Command::new("action-docs"), &mut script);
/// assert!(String::from_utf8(script).unwrap().contains("action-docs"));
/// ```
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
pub async fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    info!("Generating {shell} completions");
    write_completions(shell, cmd, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}
