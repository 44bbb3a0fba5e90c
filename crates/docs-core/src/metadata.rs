//! Normalized action metadata.
//!
//! These are the values the README template consumes. They are only ever
//! built from a descriptor that already passed schema validation, so no field
//! needs further null or length checks downstream.
//!
//! # Examples
//!
//! ```
//! use action_docs_core::{ActionInput, ActionMetadata, ActionRuns};
//!
//! let metadata = ActionMetadata {
//!     name: "Greeter".to_string(),
//!     description: "Says hello".to_string(),
//!     inputs: vec![ActionInput {
//!         id: "who".to_string(),
//!         description: "Who to greet".to_string(),
//!         required: true,
//!         default: None,
//!     }],
//!     outputs: vec![],
//!     runs: ActionRuns { using: "node20".to_string() },
//! };
//!
//! assert!(metadata.has_required_inputs());
//! assert_eq!(metadata.runs.node_version(), Some("20"));
//! ```

use serde::{Deserialize, Serialize};

/// A single input parameter declared by the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInput {
    /// Key of the input in the descriptor mapping.
    pub id: String,

    /// Trimmed human-readable description.
    pub description: String,

    /// Whether callers must supply this input.
    pub required: bool,

    /// Default value, if the descriptor declares one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// A single output declared by the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutput {
    /// Key of the output in the descriptor mapping.
    pub id: String,

    /// Trimmed human-readable description.
    pub description: String,
}

/// Execution mechanism of the action.
///
/// Only the fields needed for documentation are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRuns {
    /// Runtime identifier: `node20`, `node24`, `docker`, `composite`, ...
    pub using: String,
}

impl ActionRuns {
    /// Returns `true` for container actions.
    #[must_use]
    pub fn is_docker(&self) -> bool {
        self.using == "docker"
    }

    /// Returns `true` for composite actions.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.using == "composite"
    }

    /// Extracts the Node.js major version from a `nodeNN` runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_docs_core::ActionRuns;
    ///
    /// let runs = ActionRuns { using: "node24".to_string() };
    /// assert_eq!(runs.node_version(), Some("24"));
    ///
    /// let runs = ActionRuns { using: "docker".to_string() };
    /// assert_eq!(runs.node_version(), None);
    /// ```
    #[must_use]
    pub fn node_version(&self) -> Option<&str> {
        node_version(&self.using)
    }
}

/// Returns the digits that follow the first `node` in a runtime string.
///
/// # Examples
///
/// ```
/// use action_docs_core::metadata::node_version;
///
/// assert_eq!(node_version("node20"), Some("20"));
/// assert_eq!(node_version("node"), None);
/// assert_eq!(node_version("composite"), None);
/// ```
#[must_use]
pub fn node_version(using: &str) -> Option<&str> {
    let start = using.find("node")? + "node".len();
    let rest = &using[start..];
    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest.len(), |(idx, _)| idx);
    (end > 0).then(|| &rest[..end])
}

/// Parsed action descriptor, reduced to the fields used for documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMetadata {
    /// Action display name.
    pub name: String,

    /// Brief description of what the action does.
    pub description: String,

    /// Input parameters, in declaration order.
    pub inputs: Vec<ActionInput>,

    /// Output parameters, in declaration order.
    pub outputs: Vec<ActionOutput>,

    /// Runs configuration.
    pub runs: ActionRuns,
}

impl ActionMetadata {
    /// Returns `true` if at least one input is required.
    #[must_use]
    pub fn has_required_inputs(&self) -> bool {
        self.inputs.iter().any(|input| input.required)
    }

    /// Returns a copy with the description replaced, if an override is given.
    #[must_use]
    pub fn with_description_override(&self, description: Option<&str>) -> Self {
        let mut metadata = self.clone();
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            metadata.description = description.to_string();
        }
        metadata
    }
}
