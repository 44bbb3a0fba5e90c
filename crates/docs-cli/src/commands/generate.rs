//! Generate command implementation.
//!
//! This command:
//! 1. Assembles the generator configuration from flags / `INPUT_*` variables
//! 2. Parses and validates the action descriptor
//! 3. Renders the README and writes it
//! 4. Publishes step outputs and a job summary when running in a workflow

use super::common::{RunnerEnv, workspace};
use crate::config::{ConfigAssembler, ConfigInputs};
use crate::formatters::format_output;
use crate::workflow;
use action_docs_core::SectionName;
use action_docs_core::cli::{ExitCode, OutputFormat};
use action_docs_core::traits::FileAccess;
use action_docs_render::{GenerationResult, ReadmeGenerator};
use action_docs_schema::load_action_metadata;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// Outcome of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Action name from the descriptor
    pub action: String,
    /// Version used in `uses:` lines
    pub version: String,
    /// Rendered content and where it went
    pub result: GenerationResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationSummary<'a> {
    action: &'a str,
    output_path: String,
    version: &'a str,
    sections_generated: &'a [SectionName],
}

impl<'a> From<&'a GenerationReport> for GenerationSummary<'a> {
    fn from(report: &'a GenerationReport) -> Self {
        Self {
            action: &report.action,
            output_path: report.result.output_path.display().to_string(),
            version: &report.version,
            sections_generated: &report.result.sections_generated,
        }
    }
}

/// Runs the generate command in the current working directory.
///
/// # Errors
///
/// Returns an error if configuration, descriptor parsing, rendering or
/// writing fails.
pub async fn run(
    inputs: ConfigInputs,
    runner: RunnerEnv,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let files = workspace()?;
    let report = generate(&files, &inputs, &runner).await?;
    publish(&report, &runner).await?;

    let summary = GenerationSummary::from(&report);
    println!("{}", format_output(&summary, output_format)?);
    Ok(ExitCode::SUCCESS)
}

/// Assembles the configuration, loads the descriptor and writes the README.
///
/// # Errors
///
/// Returns an error wrapping the underlying [`action_docs_core::Error`].
pub async fn generate(
    files: &dyn FileAccess,
    inputs: &ConfigInputs,
    runner: &RunnerEnv,
) -> Result<GenerationReport> {
    let tags = runner.tag_source();
    let mut assembler = ConfigAssembler::new(files).with_github_repository(runner.repository());
    if let Some(source) = &tags {
        assembler = assembler.with_tag_source(source);
    }

    let config = assembler.assemble(inputs).await.context("invalid configuration")?;
    info!("Action path: {}", config.action_path);
    info!("Output path: {}", config.output_path);
    info!("Repository: {}", config.repository_url);
    info!("Version: {}", config.version);

    let metadata = load_action_metadata(files, &config.action_path)
        .await
        .with_context(|| format!("failed to load action from {}", config.action_path))?;
    info!(
        "Parsed action: {} ({} inputs, {} outputs)",
        metadata.name,
        metadata.inputs.len(),
        metadata.outputs.len()
    );

    let result = ReadmeGenerator::new(files)
        .generate(&metadata, &config)
        .await
        .context("failed to generate README")?;

    Ok(GenerationReport {
        action: metadata.name,
        version: config.version,
        result,
    })
}

/// Appends step outputs and the job summary to the runner files that are set.
///
/// # Errors
///
/// Returns an error if a runner file cannot be written.
pub async fn publish(report: &GenerationReport, runner: &RunnerEnv) -> Result<()> {
    if let Some(path) = &runner.output_file {
        let outputs = workflow::generation_outputs(&report.result)?;
        workflow::append(path, &outputs).await?;
        info!("Step outputs written to {}", path.display());
    }

    if let Some(path) = &runner.summary_file {
        let summary = workflow::generation_summary(&report.action, &report.result);
        workflow::append(path, &summary).await?;
    }

    Ok(())
}
