//! Declarative constraint trees and their interpreter.
//!
//! A [`Schema`] describes the accepted shape of a JSON-like document. One
//! interpreter ([`check`]) walks the tree alongside the document, collects
//! every [`Issue`] it finds, and produces a normalized copy of the input:
//! strings trimmed where the rule asks for it and object keys the schema does
//! not mention removed. [`validate`] then deserializes that copy into a typed
//! value.
//!
//! # Examples
//!
//! ```
//! use action_docs_schema::schema::{Field, Schema, StringRule, check};
//! use serde_json::json;
//!
//! let schema = Schema::Object(vec![
//!     Field::required("name", Schema::String(StringRule::new().trim().min(1))),
//!     Field::optional("tags", Schema::array(Schema::String(StringRule::new()))),
//! ]);
//!
//! let normalized = check(&schema, &json!({ "name": "  greet  ", "extra": 1 })).unwrap();
//! assert_eq!(normalized, json!({ "name": "greet" }));
//!
//! let failure = check(&schema, &json!({ "tags": [1] })).unwrap_err();
//! assert_eq!(
//!     failure.to_string(),
//!     "name: Required\n  tags.0: Invalid input: expected string, received number"
//! );
//! ```

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Extra validation for a string, returning the issue message on failure.
pub type StringCheck = fn(&str) -> Result<(), String>;

/// A regular expression a string must match, with the message reported when
/// it does not.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    regex: &'static LazyLock<Regex>,
    message: &'static str,
}

impl Pattern {
    /// Creates a pattern rule.
    #[must_use]
    pub const fn new(regex: &'static LazyLock<Regex>, message: &'static str) -> Self {
        Self { regex, message }
    }

    fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// Constraints on a string value.
///
/// Lengths are counted in characters after trimming (if enabled).
#[derive(Debug, Clone, Copy, Default)]
pub struct StringRule {
    min: Option<usize>,
    max: Option<usize>,
    trim: bool,
    pattern: Option<Pattern>,
    check: Option<StringCheck>,
}

impl StringRule {
    /// An unconstrained string rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: None,
            max: None,
            trim: false,
            pattern: None,
            check: None,
        }
    }

    /// Requires at least `min` characters.
    #[must_use]
    pub const fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Allows at most `max` characters.
    #[must_use]
    pub const fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Trims surrounding whitespace before the other checks run.
    #[must_use]
    pub const fn trim(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Requires the value to match `pattern`.
    #[must_use]
    pub const fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Runs `check` after the built-in constraints.
    #[must_use]
    pub const fn check(mut self, check: StringCheck) -> Self {
        self.check = Some(check);
        self
    }

    /// Applies the rule, returning the normalized string and any messages.
    fn apply(&self, raw: &str) -> (String, Vec<(IssueKind, String)>) {
        let value = if self.trim { raw.trim() } else { raw };
        let length = value.chars().count();
        let mut problems = Vec::new();

        if let Some(min) = self.min
            && length < min
        {
            problems.push((
                IssueKind::TooSmall,
                format!("must be at least {min} characters"),
            ));
        }
        if let Some(max) = self.max
            && length > max
        {
            problems.push((
                IssueKind::TooBig,
                format!("must be at most {max} characters"),
            ));
        }
        if let Some(pattern) = &self.pattern
            && !pattern.matches(value)
        {
            problems.push((IssueKind::Pattern, pattern.message.to_string()));
        }
        if let Some(check) = self.check
            && let Err(message) = check(value)
        {
            problems.push((IssueKind::Custom, message));
        }

        (value.to_string(), problems)
    }
}

/// A named property of an object schema.
#[derive(Debug, Clone)]
pub struct Field {
    /// Property key
    pub name: &'static str,
    /// Schema for the property value
    pub schema: Schema,
    /// Whether the property may be absent
    pub optional: bool,
}

impl Field {
    /// A property that must be present.
    #[must_use]
    pub const fn required(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            optional: false,
        }
    }

    /// A property that may be absent. Present-but-null is still a type error.
    #[must_use]
    pub const fn optional(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            optional: true,
        }
    }
}

/// Node of a constraint tree.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Accepts any value unchanged.
    Any,
    /// A boolean.
    Bool,
    /// A string with constraints.
    String(StringRule),
    /// An object with known properties; other keys are dropped.
    Object(Vec<Field>),
    /// An object used as a map: every key checked by `key`, every value by `value`.
    Record {
        /// Rule for each key
        key: StringRule,
        /// Schema for each value
        value: Box<Schema>,
    },
    /// A list of values with optional size bounds.
    Array {
        /// Schema for each element
        item: Box<Schema>,
        /// Minimum element count
        min: Option<usize>,
        /// Maximum element count
        max: Option<usize>,
    },
}

impl Schema {
    /// An unbounded array of `item`.
    #[must_use]
    pub fn array(item: Self) -> Self {
        Self::Array {
            item: Box::new(item),
            min: None,
            max: None,
        }
    }

    /// A record whose keys follow `key` and values follow `value`.
    #[must_use]
    pub fn record(key: StringRule, value: Self) -> Self {
        Self::Record {
            key,
            value: Box::new(value),
        }
    }

    const fn expected(&self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Bool => Some("boolean"),
            Self::String(_) => Some("string"),
            Self::Object(_) | Self::Record { .. } => Some("object"),
            Self::Array { .. } => Some("array"),
        }
    }
}

/// One step in the path to an offending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key
    Key(String),
    /// Array index
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// A required property is missing.
    Required,
    /// The value has the wrong JSON type.
    InvalidType,
    /// String or array shorter than allowed.
    TooSmall,
    /// String or array longer than allowed.
    TooBig,
    /// String does not match the required pattern.
    Pattern,
    /// A custom string check failed.
    Custom,
}

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Location of the offending value; empty for the document itself
    pub path: Vec<PathSegment>,
    /// Problem category
    pub kind: IssueKind,
    /// Human-readable message
    pub message: String,
}

impl Issue {
    /// Renders the path with `.` separators, or `root` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_docs_schema::schema::{Issue, IssueKind, PathSegment};
    ///
    /// let issue = Issue {
    ///     path: vec![PathSegment::Index(0), PathSegment::Key("url".to_string())],
    ///     kind: IssueKind::Custom,
    ///     message: "Invalid URL format".to_string(),
    /// };
    /// assert_eq!(issue.path_string(), "0.url");
    /// ```
    #[must_use]
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            return "root".to_string();
        }
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path_string(), self.message)
    }
}

/// Every issue found while checking a document.
///
/// Displays as `path: message` lines joined by a newline and two spaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", format_issues(.issues))]
pub struct ValidationFailure {
    /// Issues in discovery order
    pub issues: Vec<Issue>,
}

impl ValidationFailure {
    /// The first issue found, which friendly-message lookups key on.
    #[must_use]
    pub fn first(&self) -> Option<&Issue> {
        self.issues.first()
    }
}

fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n  ")
}

/// Returns the type name used in mismatch messages.
const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

struct Walker {
    path: Vec<PathSegment>,
    issues: Vec<Issue>,
}

impl Walker {
    fn report(&mut self, kind: IssueKind, message: String) {
        self.issues.push(Issue {
            path: self.path.clone(),
            kind,
            message,
        });
    }

    fn mismatch(&mut self, schema: &Schema, value: &Value) -> Value {
        let expected = schema.expected().unwrap_or("value");
        self.report(
            IssueKind::InvalidType,
            format!(
                "Invalid input: expected {expected}, received {}",
                kind_of(value)
            ),
        );
        Value::Null
    }

    fn nested<F>(&mut self, segment: PathSegment, f: F) -> Value
    where
        F: FnOnce(&mut Self) -> Value,
    {
        self.path.push(segment);
        let value = f(self);
        self.path.pop();
        value
    }

    fn walk(&mut self, schema: &Schema, value: &Value) -> Value {
        match (schema, value) {
            (Schema::Any, _) => value.clone(),
            (Schema::Bool, Value::Bool(_)) => value.clone(),
            (Schema::String(rule), Value::String(raw)) => self.walk_string(rule, raw),
            (Schema::Object(fields), Value::Object(map)) => self.walk_object(fields, map),
            (Schema::Record { key, value: item }, Value::Object(map)) => {
                self.walk_record(key, item, map)
            }
            (Schema::Array { item, min, max }, Value::Array(items)) => {
                self.walk_array(item, *min, *max, items)
            }
            _ => self.mismatch(schema, value),
        }
    }

    fn walk_string(&mut self, rule: &StringRule, raw: &str) -> Value {
        let (normalized, problems) = rule.apply(raw);
        for (kind, message) in problems {
            self.report(kind, message);
        }
        Value::String(normalized)
    }

    fn walk_object(&mut self, fields: &[Field], map: &Map<String, Value>) -> Value {
        let mut out = Map::new();
        for field in fields {
            match map.get(field.name) {
                Some(value) => {
                    let normalized = self.nested(PathSegment::Key(field.name.to_string()), |w| {
                        w.walk(&field.schema, value)
                    });
                    out.insert(field.name.to_string(), normalized);
                }
                None if field.optional => {}
                None => {
                    self.nested(PathSegment::Key(field.name.to_string()), |w| {
                        w.report(IssueKind::Required, "Required".to_string());
                        Value::Null
                    });
                }
            }
        }
        Value::Object(out)
    }

    fn walk_record(&mut self, key: &StringRule, item: &Schema, map: &Map<String, Value>) -> Value {
        let mut out = Map::new();
        for (name, value) in map {
            let normalized = self.nested(PathSegment::Key(name.clone()), |w| {
                let (_, problems) = key.apply(name);
                for (kind, message) in problems {
                    w.report(kind, message);
                }
                w.walk(item, value)
            });
            out.insert(name.clone(), normalized);
        }
        Value::Object(out)
    }

    fn walk_array(
        &mut self,
        item: &Schema,
        min: Option<usize>,
        max: Option<usize>,
        items: &[Value],
    ) -> Value {
        let normalized = items
            .iter()
            .enumerate()
            .map(|(index, value)| self.nested(PathSegment::Index(index), |w| w.walk(item, value)))
            .collect();

        if let Some(min) = min
            && items.len() < min
        {
            self.report(
                IssueKind::TooSmall,
                format!("must contain at least {min} item(s)"),
            );
        }
        if let Some(max) = max
            && items.len() > max
        {
            self.report(
                IssueKind::TooBig,
                format!("must contain at most {max} item(s)"),
            );
        }

        Value::Array(normalized)
    }
}

/// Checks `value` against `schema` and returns the normalized value.
///
/// # Errors
///
/// Returns a [`ValidationFailure`] listing every issue found.
pub fn check(schema: &Schema, value: &Value) -> Result<Value, ValidationFailure> {
    let mut walker = Walker {
        path: Vec::new(),
        issues: Vec::new(),
    };
    let normalized = walker.walk(schema, value);

    if walker.issues.is_empty() {
        Ok(normalized)
    } else {
        tracing::debug!(issues = walker.issues.len(), "schema validation failed");
        Err(ValidationFailure {
            issues: walker.issues,
        })
    }
}

/// Checks `value` against `schema` and deserializes the normalized value.
///
/// # Errors
///
/// Returns a [`ValidationFailure`] if the value breaks the schema, or if the
/// normalized value does not fit `T`.
pub fn validate<T: DeserializeOwned>(schema: &Schema, value: &Value) -> Result<T, ValidationFailure> {
    let normalized = check(schema, value)?;
    serde_json::from_value(normalized).map_err(|err| ValidationFailure {
        issues: vec![Issue {
            path: Vec::new(),
            kind: IssueKind::InvalidType,
            message: err.to_string(),
        }],
    })
}
