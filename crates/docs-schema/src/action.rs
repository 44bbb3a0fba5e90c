//! Action descriptor schema.
//!
//! Validation keeps the raw shape of the descriptor (mappings stay mappings,
//! `required` stays whatever the author wrote); [`crate::transform`] turns the
//! result into [`ActionMetadata`](action_docs_core::ActionMetadata).

use crate::schema::{Field, Issue, IssueKind, PathSegment, Schema, StringRule, ValidationFailure};
use action_docs_core::Error;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Maximum action name length.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum action description length.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Maximum input/output description length.
pub const MAX_ENTRY_DESCRIPTION_LENGTH: usize = 500;

/// Maximum input default length.
pub const MAX_DEFAULT_LENGTH: usize = 1000;

/// Maximum input/output key length.
pub const MAX_ENTRY_KEY_LENGTH: usize = 100;

/// Maximum `runs.using` length.
pub const MAX_USING_LENGTH: usize = 50;

static ACTION_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    let input = Schema::Object(vec![
        Field::required(
            "description",
            Schema::String(StringRule::new().max(MAX_ENTRY_DESCRIPTION_LENGTH)),
        ),
        Field::optional("required", Schema::Any),
        Field::optional(
            "default",
            Schema::String(StringRule::new().max(MAX_DEFAULT_LENGTH)),
        ),
    ]);
    let output = Schema::Object(vec![Field::required(
        "description",
        Schema::String(StringRule::new().max(MAX_ENTRY_DESCRIPTION_LENGTH)),
    )]);
    let entry_key = StringRule::new().max(MAX_ENTRY_KEY_LENGTH);

    Schema::Object(vec![
        Field::required(
            "name",
            Schema::String(StringRule::new().trim().min(1).max(MAX_NAME_LENGTH)),
        ),
        Field::required(
            "description",
            Schema::String(StringRule::new().trim().min(1).max(MAX_DESCRIPTION_LENGTH)),
        ),
        Field::required(
            "runs",
            Schema::Object(vec![Field::required(
                "using",
                Schema::String(StringRule::new().trim().min(1).max(MAX_USING_LENGTH)),
            )]),
        ),
        Field::optional("inputs", Schema::record(entry_key, input)),
        Field::optional("outputs", Schema::record(entry_key, output)),
    ])
});

/// Returns the descriptor schema.
#[must_use]
pub fn action_schema() -> &'static Schema {
    &ACTION_SCHEMA
}

/// Validated but untransformed action descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAction {
    /// Trimmed name
    pub name: String,
    /// Trimmed description
    pub description: String,
    /// Runs block
    pub runs: RawRuns,
    /// Inputs, in declaration order
    #[serde(default)]
    pub inputs: Option<IndexMap<String, RawInput>>,
    /// Outputs, in declaration order
    #[serde(default)]
    pub outputs: Option<IndexMap<String, RawOutput>>,
}

/// Runs block of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRuns {
    /// Trimmed runtime identifier
    pub using: String,
}

/// Input entry of a descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawInput {
    /// Description as written
    pub description: String,
    /// Requiredness as written (boolean, string, or anything else)
    #[serde(default)]
    pub required: Option<Value>,
    /// Default value
    #[serde(default)]
    pub default: Option<String>,
}

/// Output entry of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawOutput {
    /// Description as written
    pub description: String,
}

/// Validates a parsed descriptor document.
///
/// # Errors
///
/// Returns the full issue list on failure; see [`describe_failure`] for the
/// user-facing error.
pub fn validate_action(document: &Value) -> Result<RawAction, ValidationFailure> {
    crate::schema::validate(action_schema(), document)
}

const RUNS_MESSAGE: &str = "runs must be an object with a using field";

/// Where a friendly message applies.
#[derive(Debug, Clone, Copy)]
enum PathPattern {
    /// The document itself
    Root,
    /// One exact top-level path
    Exact(&'static str),
    /// `<section>.<entry>.<field>`
    EntryField {
        section: &'static str,
        field: &'static str,
    },
}

/// How to build the friendly message.
#[derive(Debug, Clone, Copy)]
enum Reply {
    /// Always this text
    Fixed(&'static str),
    /// This text for a missing value, otherwise the issue message
    WhenRequired(&'static str),
    /// Missing-description wording for an input/output entry
    EntryDescription,
}

#[derive(Debug, Clone, Copy)]
struct FriendlyRule {
    pattern: PathPattern,
    reply: Reply,
}

const FRIENDLY_RULES: &[FriendlyRule] = &[
    FriendlyRule {
        pattern: PathPattern::Root,
        reply: Reply::Fixed("action.yaml must be a valid YAML object"),
    },
    FriendlyRule {
        pattern: PathPattern::Exact("name"),
        reply: Reply::Fixed("name is required and must be a non-empty string"),
    },
    FriendlyRule {
        pattern: PathPattern::Exact("description"),
        reply: Reply::Fixed("description is required and must be a non-empty string"),
    },
    FriendlyRule {
        pattern: PathPattern::Exact("runs"),
        reply: Reply::WhenRequired(RUNS_MESSAGE),
    },
    FriendlyRule {
        pattern: PathPattern::Exact("runs.using"),
        reply: Reply::WhenRequired(RUNS_MESSAGE),
    },
    FriendlyRule {
        pattern: PathPattern::EntryField {
            section: "inputs",
            field: "description",
        },
        reply: Reply::EntryDescription,
    },
    FriendlyRule {
        pattern: PathPattern::EntryField {
            section: "outputs",
            field: "description",
        },
        reply: Reply::EntryDescription,
    },
];

fn key_is(segment: &PathSegment, expected: &str) -> bool {
    matches!(segment, PathSegment::Key(key) if key == expected)
}

impl PathPattern {
    fn matches(&self, issue: &Issue) -> bool {
        match *self {
            Self::Root => issue.path.is_empty(),
            Self::Exact(path) => issue.path_string() == path,
            Self::EntryField { section, field } => {
                issue.path.len() == 3
                    && key_is(&issue.path[0], section)
                    && key_is(&issue.path[2], field)
            }
        }
    }
}

impl Reply {
    fn render(&self, issue: &Issue) -> String {
        match *self {
            Self::Fixed(text) => text.to_string(),
            Self::WhenRequired(text) => {
                if issue.kind == IssueKind::Required {
                    text.to_string()
                } else {
                    issue.message.clone()
                }
            }
            Self::EntryDescription => {
                let entry = issue
                    .path
                    .get(1)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                match issue.kind {
                    IssueKind::Required | IssueKind::InvalidType => {
                        format!("'{entry}' is missing a description")
                    }
                    _ => format!("'{entry}' has an invalid description: {}", issue.message),
                }
            }
        }
    }
}

/// Converts a descriptor validation failure into the user-facing error.
///
/// The first issue is looked up in a small table of friendly messages; when
/// no entry matches, every issue is listed.
///
/// # Examples
///
/// ```
/// use action_docs_schema::action::{describe_failure, validate_action};
/// use serde_json::json;
///
/// let failure = validate_action(&json!({ "description": "d", "runs": { "using": "node20" } }))
///     .unwrap_err();
/// let err = describe_failure(&failure);
/// assert_eq!(
///     err.to_string(),
///     "Validation failed for 'name': name is required and must be a non-empty string"
/// );
/// ```
#[must_use]
pub fn describe_failure(failure: &ValidationFailure) -> Error {
    let Some(first) = failure.first() else {
        return Error::ValidationError {
            field: "root".to_string(),
            reason: "action.yaml must be a valid YAML object".to_string(),
        };
    };

    let field = first.path_string();
    let reason = FRIENDLY_RULES
        .iter()
        .find(|rule| rule.pattern.matches(first))
        .map_or_else(|| failure.to_string(), |rule| rule.reply.render(first));

    Error::ValidationError { field, reason }
}
