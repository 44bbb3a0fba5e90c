//! Command execution and runtime logic.
//!
//! Contains logging initialization, command dispatch and the mapping from
//! failures to exit codes.

use action_docs_core::Error;
use action_docs_core::cli::{ExitCode, OutputFormat};
use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::{commands, workflow};

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, defaulting
/// to info. Logs go to stderr so stdout carries only command output.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub async fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate { inputs, runner } => {
            commands::generate::run(inputs, runner, output_format).await
        }
        Commands::Validate { inputs } => commands::validate::run(inputs, output_format).await,
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd).await
        }
    }
}

/// Maps a failure to its exit code.
///
/// The first [`Error`] in the context chain decides; anything else is a
/// general error.
///
/// # Examples
///
/// ```
/// use action_docs_cli::runner::exit_code_for;
/// use action_docs_core::Error;
/// use action_docs_core::cli::ExitCode;
/// use anyhow::Context;
///
/// let err = Err::<(), _>(Error::ResourceNotFound { resource: "action.yml".into() })
///     .context("failed to load action")
///     .unwrap_err();
/// assert_eq!(exit_code_for(&err), ExitCode::FILE_ERROR);
/// assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), ExitCode::ERROR);
/// ```
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}

/// Reports a failure on stderr, plus an `::error::` annotation inside a workflow.
pub fn report_failure(error: &anyhow::Error, in_workflow: bool) {
    eprintln!("{} {error:#}", "error:".red().bold());
    if in_workflow {
        println!("{}", workflow::error_annotation(&format!("{error:#}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn wrapped(error: Error) -> anyhow::Error {
        Err::<(), _>(error).context("command failed").unwrap_err()
    }

    #[test]
    fn test_exit_code_for_invalid_input() {
        let err = wrapped(Error::ValidationError {
            field: "name".into(),
            reason: "Required".into(),
        });
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);

        let err = wrapped(Error::ConfigError {
            message: "Invalid badges JSON".into(),
        });
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_exit_code_for_file_errors() {
        let err = wrapped(Error::PathTraversal {
            path: "../x".into(),
        });
        assert_eq!(exit_code_for(&err), ExitCode::FILE_ERROR);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let err = wrapped(Error::TemplateError {
            message: "bad".into(),
        });
        assert_eq!(exit_code_for(&err), ExitCode::ERROR);
        assert_eq!(exit_code_for(&anyhow::anyhow!("plain")), ExitCode::ERROR);
    }

    #[test]
    fn test_init_logging_twice_fails() {
        let first = init_logging(false);
        let second = init_logging(true);
        assert!(first.is_err() || second.is_err());
    }
}
