//! Runner environment shared by the commands.
//!
//! The GitHub Actions runner describes the job through `GITHUB_*` variables.
//! They are read through hidden flags so tests and local runs can set them
//! explicitly.

use crate::github::{DEFAULT_API_URL, GitHubTagSource};
use action_docs_files::SandboxedFiles;
use anyhow::{Context, Result};
use clap::Args;
use secrecy::SecretString;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

/// `GITHUB_*` variables of the current job.
#[derive(Clone, Default, Args)]
pub struct RunnerEnv {
    /// `owner/repo` of the workflow repository
    #[arg(long = "github-repository", env = "GITHUB_REPOSITORY", hide = true)]
    pub repository: Option<String>,

    /// Token used to list repository tags
    #[arg(
        long = "github-token",
        env = "GITHUB_TOKEN",
        hide = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// REST API base URL
    #[arg(
        long = "github-api-url",
        env = "GITHUB_API_URL",
        default_value = DEFAULT_API_URL,
        hide = true
    )]
    pub api_url: String,

    /// File receiving step outputs
    #[arg(long = "github-output", env = "GITHUB_OUTPUT", hide = true)]
    pub output_file: Option<PathBuf>,

    /// File receiving the job summary
    #[arg(long = "github-step-summary", env = "GITHUB_STEP_SUMMARY", hide = true)]
    pub summary_file: Option<PathBuf>,
}

impl fmt::Debug for RunnerEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerEnv")
            .field("repository", &self.repository)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("output_file", &self.output_file)
            .field("summary_file", &self.summary_file)
            .finish()
    }
}

impl RunnerEnv {
    /// Returns the repository if it is set and not blank.
    #[must_use]
    pub fn repository(&self) -> Option<String> {
        self.repository
            .as_deref()
            .map(str::trim)
            .filter(|repo| !repo.is_empty())
            .map(str::to_string)
    }

    /// Builds the tag source used for `auto` version detection.
    ///
    /// Returns `None` without a token. An unusable API URL is logged and
    /// also yields `None`, so the run falls back to the default version.
    #[must_use]
    pub fn tag_source(&self) -> Option<GitHubTagSource> {
        let Some(token) = self.token.as_deref().filter(|t| !t.trim().is_empty()) else {
            debug!("GITHUB_TOKEN not set, tag lookup disabled");
            return None;
        };

        match GitHubTagSource::new(&self.api_url, SecretString::from(token)) {
            Ok(source) => Some(source),
            Err(err) => {
                warn!("Tag lookup disabled: {err}");
                None
            }
        }
    }
}

/// Opens the current working directory as the file sandbox.
///
/// # Errors
///
/// Returns an error if the working directory cannot be determined.
pub fn workspace() -> Result<SandboxedFiles> {
    SandboxedFiles::from_current_dir().context("failed to open working directory")
}
