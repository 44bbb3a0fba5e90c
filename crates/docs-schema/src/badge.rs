//! Badge list schema.

use crate::schema::{Field, Schema, StringRule, ValidationFailure, validate};
use action_docs_core::security::validate_http_url;
use action_docs_core::{Badge, Error, Result};
use serde_json::Value;
use std::sync::LazyLock;

fn public_http_url(value: &str) -> std::result::Result<(), String> {
    validate_http_url(value)
        .map(|_| ())
        .map_err(|rejection| rejection.to_string())
}

static BADGES_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::array(Schema::Object(vec![
        Field::required("label", Schema::String(StringRule::new().min(1).max(100))),
        Field::required("message", Schema::String(StringRule::new().min(1).max(200))),
        Field::required("color", Schema::String(StringRule::new().min(1).max(50))),
        Field::optional(
            "url",
            Schema::String(StringRule::new().check(public_http_url)),
        ),
        Field::optional("markdown", Schema::String(StringRule::new().max(1000))),
    ]))
});

/// Returns the badge list schema.
#[must_use]
pub fn badges_schema() -> &'static Schema {
    &BADGES_SCHEMA
}

/// Validates a list of badges, checking each element independently.
///
/// # Errors
///
/// Returns every issue found; badge URLs are checked with
/// [`validate_http_url`].
pub fn validate_badges(document: &Value) -> std::result::Result<Vec<Badge>, ValidationFailure> {
    validate(badges_schema(), document)
}

/// Validates badges and reports failures as configuration errors.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] listing every issue.
///
/// # Examples
///
/// ```
/// use action_docs_schema::badges_from_value;
/// use serde_json::json;
///
/// let badges = badges_from_value(&json!([
///     { "label": "build", "message": "passing", "color": "green" }
/// ]))
/// .unwrap();
/// assert_eq!(badges[0].label, "build");
///
/// let err = badges_from_value(&json!([
///     { "label": "x", "message": "y", "color": "red", "url": "http://127.0.0.1/" }
/// ]))
/// .unwrap_err();
/// assert!(err.to_string().contains("0.url: URL cannot reference private or internal addresses"));
/// ```
pub fn badges_from_value(document: &Value) -> Result<Vec<Badge>> {
    validate_badges(document).map_err(|failure| Error::ConfigError {
        message: format!("Badge validation failed:\n  {failure}"),
    })
}
