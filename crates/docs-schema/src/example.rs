//! Examples configuration schema.
//!
//! The examples file is YAML with a single `examples` list:
//!
//! ```yaml
//! examples:
//!   - title: Basic usage
//!     description: Greets the default audience.
//!     version: v2
//!     with:
//!       who: world
//! ```

use crate::schema::{Field, Pattern, Schema, StringRule, ValidationFailure, validate};
use action_docs_core::Example;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Maximum number of examples in one file.
pub const MAX_EXAMPLES: usize = 50;

// Tags, branches, or commit SHAs
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9._/-]*$").expect("valid regex"));
// Workflow input names
static INPUT_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").expect("valid regex"));

static EXAMPLE_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::Object(vec![
        Field::required("title", Schema::String(StringRule::new().min(3).max(100))),
        Field::required(
            "description",
            Schema::String(StringRule::new().min(10).max(500)),
        ),
        Field::optional("name", Schema::String(StringRule::new().min(3).max(100))),
        Field::optional(
            "version",
            Schema::String(
                StringRule::new()
                    .min(1)
                    .max(100)
                    .pattern(Pattern::new(&VERSION_REGEX, "Invalid version format")),
            ),
        ),
        Field::optional(
            "with",
            Schema::record(
                StringRule::new().pattern(Pattern::new(&INPUT_NAME_REGEX, "Invalid input name")),
                Schema::String(StringRule::new().max(1000)),
            ),
        ),
    ])
});

static EXAMPLES_CONFIG_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::Object(vec![Field::required(
        "examples",
        Schema::Array {
            item: Box::new(EXAMPLE_SCHEMA.clone()),
            min: Some(1),
            max: Some(MAX_EXAMPLES),
        },
    )])
});

/// Returns the schema of a single example.
#[must_use]
pub fn example_schema() -> &'static Schema {
    &EXAMPLE_SCHEMA
}

/// Returns the schema of the examples file.
#[must_use]
pub fn examples_config_schema() -> &'static Schema {
    &EXAMPLES_CONFIG_SCHEMA
}

#[derive(Debug, Deserialize)]
struct ExamplesConfig {
    examples: Vec<Example>,
}

/// Validates a parsed examples file and returns its examples.
///
/// # Errors
///
/// Returns every issue found, with paths such as `examples.0.title`.
pub fn validate_examples_config(document: &Value) -> Result<Vec<Example>, ValidationFailure> {
    validate::<ExamplesConfig>(examples_config_schema(), document).map(|config| config.examples)
}

/// Validates a single example.
///
/// # Errors
///
/// Returns every issue found.
pub fn validate_example(document: &Value) -> Result<Example, ValidationFailure> {
    validate(example_schema(), document)
}
