//! Schema validation for action-docs inputs.
//!
//! This crate turns untrusted documents (the action descriptor, the badges
//! JSON, the examples YAML) into the typed values of `action-docs-core`.
//!
//! # Architecture
//!
//! The validation flow:
//! 1. `parser` - Parses YAML text into a value tree
//! 2. `schema` - Checks the tree against a declarative constraint tree
//! 3. `action` / `badge` / `example` - The concrete schemas
//! 4. `transform` - Builds `ActionMetadata` from a validated descriptor
//!
//! # Examples
//!
//! ```no_run
//! use action_docs_schema::load_action_metadata;
//! use action_docs_core::traits::FileAccess;
//!
//! # async fn example(files: &dyn FileAccess) -> action_docs_core::Result<()> {
//! let metadata = load_action_metadata(files, "./action").await?;
//! println!("{} has {} inputs", metadata.name, metadata.inputs.len());
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod badge;
pub mod example;
mod parser;
pub mod schema;
mod transform;

pub use badge::{badges_from_value, validate_badges};
pub use example::{validate_example, validate_examples_config};
pub use parser::{
    ACTION_EXTENSIONS, load_action_metadata, load_examples, parse_action_yaml,
    parse_examples_yaml, parse_yaml, resolve_action_path,
};
pub use schema::{Issue, IssueKind, PathSegment, ValidationFailure};
pub use transform::{parse_boolean, to_metadata};
