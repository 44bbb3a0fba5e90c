//! Validate command implementation.
//!
//! Checks the action descriptor and the generator inputs that can be checked
//! offline (badges, sections, header level, examples file) without rendering
//! or writing anything.

use super::common::workspace;
use crate::config::{ConfigInputs, parse_badges, parse_header_level, parse_sections, present};
use crate::formatters::format_output;
use action_docs_core::cli::{ExitCode, OutputFormat};
use action_docs_core::traits::FileAccess;
use action_docs_core::version::DEFAULT_VERSION;
use action_docs_core::{DEFAULT_ACTION_PATH, GeneratorConfig, SectionName};
use action_docs_render::determine_sections;
use action_docs_schema::{load_examples, parse_action_yaml, resolve_action_path};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// What a valid descriptor and input set would produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Descriptor file that was read
    pub action_path: String,
    /// Action name
    pub name: String,
    /// `runs.using` value
    pub runtime: String,
    /// Number of inputs
    pub inputs: usize,
    /// Number of required inputs
    pub required_inputs: usize,
    /// Number of outputs
    pub outputs: usize,
    /// Number of badges
    pub badges: usize,
    /// Number of examples loaded from the examples file
    pub examples: usize,
    /// Sections a generate run would render
    pub sections: Vec<SectionName>,
}

/// Runs the validate command in the current working directory.
///
/// # Errors
///
/// Returns an error if the descriptor or any provided input is invalid.
pub async fn run(inputs: ConfigInputs, output_format: OutputFormat) -> Result<ExitCode> {
    let files = workspace()?;
    let report = validate(&files, &inputs).await?;
    println!("{}", format_output(&report, output_format)?);
    Ok(ExitCode::SUCCESS)
}

/// Validates the descriptor and inputs.
///
/// # Errors
///
/// Returns an error wrapping the first [`action_docs_core::Error`] found.
pub async fn validate(files: &dyn FileAccess, inputs: &ConfigInputs) -> Result<ValidationReport> {
    let badges = present(inputs.badges.as_ref())
        .map(parse_badges)
        .transpose()
        .context("invalid badges input")?
        .unwrap_or_default();
    let include = present(inputs.include_sections.as_ref())
        .map(|s| parse_sections(s, "include-sections"))
        .transpose()?
        .unwrap_or_default();
    let exclude = present(inputs.exclude_sections.as_ref())
        .map(|s| parse_sections(s, "exclude-sections"))
        .transpose()?
        .unwrap_or_default();
    if let Some(level) = present(inputs.header_level.as_ref()) {
        parse_header_level(level)?;
    }

    let examples = match present(inputs.examples_path.as_ref()) {
        Some(path) => load_examples(files, path).await?,
        None => Vec::new(),
    };

    let requested = present(inputs.action_path.as_ref()).unwrap_or(DEFAULT_ACTION_PATH);
    let action_path = resolve_action_path(files, requested).await?;
    let content = files.read(&action_path).await?;
    let metadata = parse_action_yaml(&content, &action_path)
        .with_context(|| format!("invalid action descriptor {action_path}"))?;
    info!("Action {} is valid", metadata.name);

    let sections = determine_sections(
        &GeneratorConfig::new(String::new(), DEFAULT_VERSION)
            .with_include_sections(include)
            .with_exclude_sections(exclude),
    );

    Ok(ValidationReport {
        action_path,
        required_inputs: metadata.inputs.iter().filter(|input| input.required).count(),
        inputs: metadata.inputs.len(),
        outputs: metadata.outputs.len(),
        runtime: metadata.runs.using,
        name: metadata.name,
        badges: badges.len(),
        examples: examples.len(),
        sections,
    })
}
