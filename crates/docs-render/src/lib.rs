//! README rendering for GitHub Action descriptors.
//!
//! Turns validated [`ActionMetadata`](action_docs_core::ActionMetadata) and a
//! [`GeneratorConfig`](action_docs_core::GeneratorConfig) into README markdown
//! using Handlebars templates.
//!
//! # Architecture
//!
//! - `context` - Chooses sections and builds the template context
//! - `engine` - Handlebars registry, built-in template, custom template loading
//! - `helpers` - Formatting helpers available to templates
//! - `generator` - Render and write in one step
//!
//! # Template context
//!
//! | Path | Content |
//! |------|---------|
//! | `action` | name, description, inputs, outputs, runs |
//! | `config` | license, badges, examples, repositoryUrl, contributingUrl, example, version, headerLevel |
//! | `helpers` | year, generatedAt, sections |
//! | `hasSection` | section name to bool, for every section |

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod context;
pub mod engine;
pub mod generator;
mod helpers;

pub use context::{TemplateContext, build_context, build_context_at, determine_sections};
pub use engine::{DEFAULT_TEMPLATE, README_TEMPLATE_NAME, TemplateEngine};
pub use generator::{GenerationResult, ReadmeGenerator, RenderedReadme, generate_readme};
pub use helpers::{
    HeadingHelper, escape_table_cell, format_default, register_helpers, url_encode, yaml_value,
};
