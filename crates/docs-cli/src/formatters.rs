//! Output formatters for CLI commands.
//!
//! Command summaries are flat records: JSON mode prints them as-is, text mode
//! as `key: value` lines for scripts, pretty mode as an aligned, colored listing.

use action_docs_core::cli::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use action_docs_cli::formatters::format_output;
/// use action_docs_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     action: String,
///     inputs: usize,
/// }
///
/// let summary = Summary { action: "Greeter".to_string(), inputs: 2 };
///
/// let output = format_output(&summary, OutputFormat::Text)?;
/// assert_eq!(output, "action: Greeter\ninputs: 2");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// Renders a scalar or a list of scalars on one line.
fn inline(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(inline).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, Value, inline};

    /// Format data as `key: value` lines.
    ///
    /// Lists are comma-joined; anything that is not an object is printed on
    /// a single line.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let Value::Object(fields) = value else {
            return Ok(inline(&value));
        };

        Ok(fields
            .iter()
            .map(|(key, value)| format!("{key}: {}", inline(value)))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize, Value, inline};

    /// Format data as an aligned listing with colored values.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let Value::Object(fields) = value else {
            return Ok(colorize(&value));
        };

        let width = fields.keys().map(String::len).max().unwrap_or(0);
        let mut lines = Vec::with_capacity(fields.len());
        for (key, value) in &fields {
            match value {
                Value::Array(items) if !items.is_empty() => {
                    lines.push(key.blue().bold().to_string());
                    lines.extend(items.iter().map(|item| format!("  - {}", colorize(item))));
                }
                _ => {
                    let label = format!("{key:<width$}");
                    lines.push(format!("{}  {}", label.blue().bold(), colorize(value)));
                }
            }
        }
        Ok(lines.join("\n"))
    }

    fn colorize(value: &Value) -> String {
        match value {
            Value::Null => "-".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(items) if items.is_empty() => "none".dimmed().to_string(),
            other => inline(other),
        }
    }
}
