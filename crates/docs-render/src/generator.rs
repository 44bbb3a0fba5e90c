//! README generation.
//!
//! Ties section selection, context assembly, template loading, rendering and
//! the final write together.
//!
//! # Examples
//!
//! ```no_run
//! use action_docs_core::traits::FileAccess;
//! use action_docs_core::{ActionMetadata, GeneratorConfig};
//! use action_docs_render::ReadmeGenerator;
//!
//! # async fn example(files: &dyn FileAccess, metadata: &ActionMetadata) -> action_docs_core::Result<()> {
//! let config = GeneratorConfig::new("octo/greeter", "v1");
//!
//! let result = ReadmeGenerator::new(files).generate(metadata, &config).await?;
//! println!("Wrote {}", result.output_path.display());
//! # Ok(())
//! # }
//! ```

use crate::context::{build_context, determine_sections};
use crate::engine::TemplateEngine;
use action_docs_core::traits::FileAccess;
use action_docs_core::{ActionMetadata, GeneratorConfig, Result, SectionName};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Outcome of a README generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Rendered README text
    pub content: String,
    /// Absolute path the README was written to
    pub output_path: PathBuf,
    /// Sections that were rendered, in order
    pub sections_generated: Vec<SectionName>,
}

/// Rendered README text that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReadme {
    /// Rendered README text
    pub content: String,
    /// Sections that were rendered, in order
    pub sections: Vec<SectionName>,
}

/// Generates READMEs through a [`FileAccess`] implementation.
///
/// Templates are read and the README is written through the same file access,
/// so its path policy applies to both.
pub struct ReadmeGenerator<'a> {
    files: &'a dyn FileAccess,
}

impl fmt::Debug for ReadmeGenerator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadmeGenerator").finish_non_exhaustive()
    }
}

impl<'a> ReadmeGenerator<'a> {
    /// Creates a generator over `files`.
    #[must_use]
    pub const fn new(files: &'a dyn FileAccess) -> Self {
        Self { files }
    }

    /// Renders the README without writing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the custom template cannot be read, or the
    /// template fails to compile or render.
    pub async fn render(
        &self,
        metadata: &ActionMetadata,
        config: &GeneratorConfig,
    ) -> Result<RenderedReadme> {
        let sections = determine_sections(config);
        let context = build_context(metadata, config, &sections);

        let mut engine = TemplateEngine::new(config.header_level);
        engine
            .load(self.files, config.template_path.as_deref())
            .await?;

        info!(sections = sections.len(), "rendering README");
        let content = engine.render(&context)?;
        Ok(RenderedReadme { content, sections })
    }

    /// Renders the README and writes it to `config.output_path`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`render`](Self::render), or a file access
    /// error if the README cannot be written.
    pub async fn generate(
        &self,
        metadata: &ActionMetadata,
        config: &GeneratorConfig,
    ) -> Result<GenerationResult> {
        let rendered = self.render(metadata, config).await?;
        let output_path = self
            .files
            .write(&config.output_path, &rendered.content)
            .await?;
        info!(path = %output_path.display(), "README written");

        Ok(GenerationResult {
            content: rendered.content,
            output_path,
            sections_generated: rendered.sections,
        })
    }
}

/// Renders and writes a README in one call.
///
/// # Errors
///
/// See [`ReadmeGenerator::generate`].
pub async fn generate_readme(
    metadata: &ActionMetadata,
    config: &GeneratorConfig,
    files: &dyn FileAccess,
) -> Result<GenerationResult> {
    ReadmeGenerator::new(files).generate(metadata, config).await
}
