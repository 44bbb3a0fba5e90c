//! Raw descriptor to [`ActionMetadata`] conversion.

use crate::action::{RawAction, RawInput, RawOutput};
use action_docs_core::{ActionInput, ActionMetadata, ActionOutput, ActionRuns};
use indexmap::IndexMap;
use serde_json::Value;

/// Interprets an input's `required` value.
///
/// Booleans pass through. Strings follow the YAML 1.2 core schema: exactly
/// `true` or `false` in any letter case. Everything else, absence included,
/// is `false`.
///
/// # Examples
///
/// ```
/// use action_docs_schema::parse_boolean;
/// use serde_json::json;
///
/// assert!(parse_boolean(Some(&json!(true))));
/// assert!(parse_boolean(Some(&json!("TRUE"))));
/// assert!(!parse_boolean(Some(&json!("yes"))));
/// assert!(!parse_boolean(Some(&json!(1))));
/// assert!(!parse_boolean(None));
/// ```
#[must_use]
pub fn parse_boolean(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn inputs(raw: Option<IndexMap<String, RawInput>>) -> Vec<ActionInput> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|(id, input)| ActionInput {
            id,
            description: input.description.trim().to_string(),
            required: parse_boolean(input.required.as_ref()),
            default: input.default,
        })
        .collect()
}

fn outputs(raw: Option<IndexMap<String, RawOutput>>) -> Vec<ActionOutput> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|(id, output)| ActionOutput {
            id,
            description: output.description.trim().to_string(),
        })
        .collect()
}

/// Converts a validated descriptor into the normalized model.
///
/// Mappings become sequences in declaration order and descriptions are
/// trimmed.
#[must_use]
pub fn to_metadata(raw: RawAction) -> ActionMetadata {
    ActionMetadata {
        name: raw.name.trim().to_string(),
        description: raw.description.trim().to_string(),
        inputs: inputs(raw.inputs),
        outputs: outputs(raw.outputs),
        runs: ActionRuns {
            using: raw.runs.using,
        },
    }
}
