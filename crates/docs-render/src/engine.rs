//! Template engine for README rendering.
//!
//! Wraps Handlebars with the README helpers registered and a single template
//! slot named [`README_TEMPLATE_NAME`], filled either from the built-in
//! template or from a custom file.
//!
//! # Examples
//!
//! ```
//! use action_docs_core::HeaderLevel;
//! use action_docs_render::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new(HeaderLevel::default());
//! engine.load_source("{{h 1}} {{name}}").unwrap();
//! assert_eq!(engine.render(&json!({"name": "Greeter"})).unwrap(), "# Greeter");
//! ```

use crate::helpers::register_helpers;
use action_docs_core::traits::FileAccess;
use action_docs_core::{Error, HeaderLevel, Result};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, info};

/// Name the README template is registered under.
pub const README_TEMPLATE_NAME: &str = "readme";

/// Built-in README template.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/readme.md.hbs");

/// Handlebars engine with the README helpers registered.
///
/// Strict mode is off: missing fields render as empty and are falsy in
/// conditionals. HTML escaping stays on for `{{...}}`; helpers that emit
/// markdown are used with `{{{...}}}`.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Creates an engine whose `h` helper starts at `header_level`.
    ///
    /// No template is loaded yet.
    #[must_use]
    pub fn new(header_level: HeaderLevel) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        register_helpers(&mut handlebars, header_level);
        Self { handlebars }
    }

    /// Compiles `source` as the README template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template does not compile.
    pub fn load_source(&mut self, source: &str) -> Result<()> {
        self.handlebars
            .register_template_string(README_TEMPLATE_NAME, source)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to compile template: {e}"),
            })
    }

    /// Loads the built-in README template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the built-in template does not compile.
    pub fn load_default(&mut self) -> Result<()> {
        self.load_source(DEFAULT_TEMPLATE)
    }

    /// Loads the custom template at `template_path` if it exists, the
    /// built-in template otherwise.
    ///
    /// # Errors
    ///
    /// Returns file access errors (including path traversal) and
    /// [`Error::TemplateError`] for a template that does not compile.
    pub async fn load(&mut self, files: &dyn FileAccess, template_path: Option<&str>) -> Result<()> {
        if let Some(path) = template_path.filter(|path| !path.is_empty()) {
            if files.exists(path).await? {
                info!(path, "using custom template");
                let source = files.read(path).await?;
                return self.load_source(&source);
            }
            debug!(path, "custom template not found, falling back to default");
        }
        debug!("using default template");
        self.load_default()
    }

    /// Returns `true` once a template has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.handlebars.has_template(README_TEMPLATE_NAME)
    }

    /// Renders the loaded template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if no template is loaded or rendering fails.
    pub fn render<T: Serialize>(&self, context: &T) -> Result<String> {
        if !self.is_loaded() {
            return Err(Error::TemplateError {
                message: "Template not loaded. Call load() first.".to_string(),
            });
        }
        self.handlebars
            .render(README_TEMPLATE_NAME, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to render template: {e}"),
            })
    }
}
