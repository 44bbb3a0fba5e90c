//! CLI argument definitions and parsing.
//!
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use crate::commands::common::RunnerEnv;
use crate::config::ConfigInputs;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// README generator for GitHub Actions.
///
/// Reads an action descriptor (`action.yml`) and writes documentation with
/// inputs, outputs, usage and examples sections.
#[derive(Parser, Debug)]
#[command(name = "action-docs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the README for an action.
    ///
    /// Every flag can also be given as the `INPUT_*` variable the Actions
    /// runner sets, so the binary runs unchanged as an action step.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Defaults: ./action.yaml -> ./README.md
    /// action-docs generate --repository-url octo/greeter
    ///
    /// # Pick the latest semver tag for `uses:` lines
    /// GITHUB_TOKEN=ghp_xxx action-docs generate --repository-url octo/greeter --version auto
    ///
    /// # Only some sections, one level deeper
    /// action-docs generate --include-sections title,inputs,outputs --header-level 2
    /// ```
    Generate {
        #[command(flatten)]
        inputs: ConfigInputs,

        #[command(flatten)]
        runner: RunnerEnv,
    },

    /// Validate the action descriptor and inputs without writing anything.
    Validate {
        #[command(flatten)]
        inputs: ConfigInputs,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parsing_generate() {
        let cli = Cli::parse_from([
            "action-docs",
            "generate",
            "--action-path",
            "sub/action",
            "--header-level",
            "2",
            "--include-sections",
            "title,inputs",
            "--github-output",
            "/tmp/out",
        ]);
        let Commands::Generate { inputs, runner } = cli.command else {
            panic!("Expected Generate command");
        };
        assert_eq!(inputs.action_path.as_deref(), Some("sub/action"));
        assert_eq!(inputs.header_level.as_deref(), Some("2"));
        assert_eq!(inputs.include_sections.as_deref(), Some("title,inputs"));
        assert_eq!(
            runner.output_file.as_deref(),
            Some(std::path::Path::new("/tmp/out"))
        );
    }

    #[test]
    fn test_cli_parsing_validate() {
        let cli = Cli::parse_from(["action-docs", "validate", "--badges", "[]"]);
        let Commands::Validate { inputs } = cli.command else {
            panic!("Expected Validate command");
        };
        assert_eq!(inputs.badges.as_deref(), Some("[]"));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["action-docs", "validate", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::parse_from(["action-docs", "validate"]);
        assert_eq!(cli.format, "pretty");
    }

    #[test]
    fn test_cli_output_format_custom() {
        let cli = Cli::parse_from(["action-docs", "--format", "json", "validate"]);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_parsing_completions_zsh() {
        let cli = Cli::parse_from(["action-docs", "completions", "zsh"]);
        let Commands::Completions { shell } = cli.command else {
            panic!("Expected Completions command");
        };
        assert_eq!(shell, Shell::Zsh);
    }

    #[test]
    fn test_cli_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["action-docs", "completions", "tcsh"]).is_err());
    }

    #[test]
    fn test_github_flags_hidden_from_help() {
        let mut cmd = Cli::command();
        let help = cmd
            .find_subcommand_mut("generate")
            .unwrap()
            .render_long_help()
            .to_string();
        assert!(help.contains("--action-path"));
        assert!(!help.contains("--github-token"));
    }
}
