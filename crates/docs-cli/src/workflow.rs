//! GitHub Actions runner integration.
//!
//! Step outputs go to the file named by `GITHUB_OUTPUT`, the job summary to
//! `GITHUB_STEP_SUMMARY`, both appended with the runner's file-command syntax.

use action_docs_core::SectionName;
use action_docs_render::GenerationResult;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Formats one step output using the multi-line delimiter syntax.
///
/// # Examples
///
/// ```
/// use action_docs_cli::workflow::format_output;
///
/// assert_eq!(
///     format_output("readme-path", "/w/README.md", "EOF_1"),
///     "readme-path<<EOF_1\n/w/README.md\nEOF_1\n"
/// );
/// ```
#[must_use]
pub fn format_output(name: &str, value: &str, delimiter: &str) -> String {
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Returns a delimiter that does not occur in `value`.
#[must_use]
pub fn delimiter_for(value: &str) -> String {
    loop {
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        if !value.contains(&delimiter) {
            return delimiter;
        }
    }
}

/// Renders the step outputs of a generation run.
///
/// # Errors
///
/// Returns an error if the section list cannot be serialized.
pub fn generation_outputs(result: &GenerationResult) -> Result<String> {
    let sections = serde_json::to_string(&result.sections_generated)
        .context("failed to serialize generated sections")?;
    let path = result.output_path.display().to_string();

    let mut outputs = String::new();
    for (name, value) in [
        ("readme-path", path.as_str()),
        ("content", result.content.as_str()),
        ("sections-generated", sections.as_str()),
    ] {
        outputs.push_str(&format_output(name, value, &delimiter_for(value)));
    }
    Ok(outputs)
}

/// Renders the job summary of a generation run.
#[must_use]
pub fn generation_summary(action_name: &str, result: &GenerationResult) -> String {
    let sections = result
        .sections_generated
        .iter()
        .map(SectionName::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "## README Generated\n\n\
         | Action | Output Path | Sections |\n\
         |--------|-------------|----------|\n\
         | {action_name} | {path} | {count} |\n\n\
         <details><summary>Sections Generated</summary>\n\n{sections}\n\n</details>\n",
        path = result.output_path.display(),
        count = result.sections_generated.len(),
    )
}

/// Appends `text` to a runner file, creating it if needed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub async fn append(path: &Path, text: &str) -> Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("failed to open {}", path.display()))?;
    file.write_all(text.as_bytes())
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    file.flush().await?;
    Ok(())
}

/// Formats an `::error::` workflow command for `message`.
///
/// Newlines and `%` are escaped so the whole message stays on one line.
#[must_use]
pub fn error_annotation(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}
