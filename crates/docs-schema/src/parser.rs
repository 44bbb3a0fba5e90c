//! Descriptor and examples file parsing.
//!
//! YAML is parsed into a [`serde_json::Value`] tree first (mapping order is
//! kept), then checked against the schemas in this crate.
//!
//! # Examples
//!
//! ```
//! use action_docs_schema::parse_action_yaml;
//!
//! let yaml = r#"
//! name: Greeter
//! description: Says hello
//! inputs:
//!   who:
//!     description: Who to greet
//!     required: true
//! runs:
//!   using: node20
//!   main: dist/index.js
//! "#;
//!
//! let metadata = parse_action_yaml(yaml, "action.yml").unwrap();
//! assert_eq!(metadata.name, "Greeter");
//! assert!(metadata.inputs[0].required);
//! ```

use crate::action::{describe_failure, validate_action};
use crate::example::validate_examples_config;
use crate::transform::to_metadata;
use action_docs_core::traits::FileAccess;
use action_docs_core::{ActionMetadata, Error, Example, Result};
use serde_json::Value;
use tracing::debug;

/// Descriptor file extensions, in lookup order.
pub const ACTION_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Parses YAML text into a JSON value tree.
///
/// # Errors
///
/// Returns [`Error::ParseError`] naming `source_name` if the text is not
/// valid YAML.
pub fn parse_yaml(content: &str, source_name: &str) -> Result<Value> {
    serde_yaml::from_str(content).map_err(|err| Error::ParseError {
        source_name: source_name.to_string(),
        message: err.to_string(),
    })
}

/// Parses and validates descriptor text.
///
/// # Errors
///
/// Returns [`Error::ParseError`] for malformed YAML and
/// [`Error::ValidationError`] for a descriptor that breaks the schema.
pub fn parse_action_yaml(content: &str, source_name: &str) -> Result<ActionMetadata> {
    let document = parse_yaml(content, source_name)?;
    let raw = validate_action(&document).map_err(|failure| describe_failure(&failure))?;
    Ok(to_metadata(raw))
}

/// Resolves the descriptor location.
///
/// Paths that already end in `.yaml` or `.yml` are used as given. Otherwise
/// `<path>.yaml` and then `<path>.yml` are tried.
///
/// # Errors
///
/// Returns [`Error::ResourceNotFound`] if neither candidate exists.
pub async fn resolve_action_path(files: &dyn FileAccess, path: &str) -> Result<String> {
    if ACTION_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(&format!(".{ext}")))
    {
        return Ok(path.to_string());
    }

    for ext in ACTION_EXTENSIONS {
        let candidate = format!("{path}.{ext}");
        if files.exists(&candidate).await? {
            return Ok(candidate);
        }
    }

    Err(Error::ResourceNotFound {
        resource: format!("{path} (tried .yaml and .yml extensions)"),
    })
}

/// Locates, reads, and parses the action descriptor.
///
/// # Errors
///
/// Returns [`Error::ResourceNotFound`] if the descriptor is missing, or any
/// error from [`parse_action_yaml`].
pub async fn load_action_metadata(files: &dyn FileAccess, path: &str) -> Result<ActionMetadata> {
    debug!(path, "parsing action file");
    let resolved = resolve_action_path(files, path).await?;
    let content = files.read(&resolved).await?;
    debug!(path = %resolved, "found action file");
    parse_action_yaml(&content, &resolved)
}

/// Parses and validates examples file text.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] if the YAML is malformed or breaks the
/// examples schema.
pub fn parse_examples_yaml(content: &str) -> Result<Vec<Example>> {
    let document: Value = serde_yaml::from_str(content).map_err(|err| Error::ConfigError {
        message: format!("Failed to parse examples file: {err}"),
    })?;
    validate_examples_config(&document).map_err(|failure| Error::ConfigError {
        message: format!("Validation failed:\n  {failure}"),
    })
}

/// Reads and validates an examples file.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] if the file is missing or invalid.
pub async fn load_examples(files: &dyn FileAccess, path: &str) -> Result<Vec<Example>> {
    if !files.exists(path).await? {
        return Err(Error::ConfigError {
            message: format!("Examples file not found: {path}"),
        });
    }
    let content = files.read(path).await?;
    let examples = parse_examples_yaml(&content)?;
    debug!(path, count = examples.len(), "loaded examples");
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_error_names_source() {
        let err = parse_yaml("name: [unclosed", "action.yml").unwrap_err();
        assert!(err.is_parse_error());
        assert!(
            err.to_string()
                .starts_with("Failed to parse YAML in action.yml: ")
        );
    }

    #[test]
    fn test_parse_action_yaml_string_required() {
        let yaml = "name: A\ndescription: B\nruns:\n  using: composite\ninputs:\n  x:\n    description: X\n    required: \"true\"\n";
        let metadata = parse_action_yaml(yaml, "action.yaml").unwrap();
        assert!(metadata.inputs[0].required);
    }

    #[test]
    fn test_parse_action_yaml_validation_error() {
        let err = parse_action_yaml("name: A\nruns:\n  using: node20\n", "action.yaml").unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(
            err.to_string(),
            "Validation failed for 'description': description is required and must be a non-empty string"
        );
    }

    #[test]
    fn test_scalar_document_is_root_error() {
        let err = parse_action_yaml("just text", "action.yaml").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed for 'root': action.yaml must be a valid YAML object"
        );
    }

    #[test]
    fn test_parse_examples_yaml() {
        let yaml = "examples:\n  - title: Basic\n    description: Basic usage example\n    with:\n      who: world\n";
        let examples = parse_examples_yaml(yaml).unwrap();
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].with.as_ref().unwrap()["who"], "world");
    }

    #[test]
    fn test_parse_examples_yaml_errors() {
        let err = parse_examples_yaml("examples: [").unwrap_err();
        assert!(err.to_string().contains("Failed to parse examples file: "));

        let err = parse_examples_yaml("examples:\n  - title: ab\n    description: Basic usage example\n")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Validation failed:\n  examples.0.title: must be at least 3 characters"
        );
    }
}
