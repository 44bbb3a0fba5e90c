//! Generator configuration assembly.
//!
//! Turns the raw string inputs of a run (command-line flags, or the
//! `INPUT_*` variables the Actions runner sets) into a validated
//! [`GeneratorConfig`]. Empty inputs count as unset, because the runner
//! exports every declared input even when the workflow leaves it blank.

use action_docs_core::traits::{FileAccess, TagSource};
use action_docs_core::version::{AUTO_VERSION, DEFAULT_VERSION, select_latest};
use action_docs_core::{
    Badge, DEFAULT_ACTION_PATH, DEFAULT_LICENSE, DEFAULT_OUTPUT_PATH, Error, GeneratorConfig,
    HeaderLevel, Result, SectionName,
};
use action_docs_schema::{badges_from_value, load_examples};
use clap::Args;
use std::fmt;
use tracing::{debug, warn};

/// Raw generator inputs.
///
/// Every flag falls back to the `INPUT_<NAME>` variable the Actions runner
/// sets for the matching action input.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigInputs {
    /// Path to the action descriptor; `.yaml` / `.yml` may be omitted
    /// [default: ./action.yaml]
    #[arg(long, env = "INPUT_ACTION-PATH")]
    pub action_path: Option<String>,

    /// Where to write the README [default: ./README.md]
    #[arg(long, env = "INPUT_OUTPUT-PATH")]
    pub output_path: Option<String>,

    /// Custom Handlebars template; the built-in one is used if it does not exist
    #[arg(long, env = "INPUT_TEMPLATE-PATH")]
    pub template_path: Option<String>,

    /// License name for the footer [default: MIT]
    #[arg(long, env = "INPUT_LICENSE")]
    pub license: Option<String>,

    /// Badges as a JSON array of {label, message, color, url?, markdown?}
    #[arg(long, env = "INPUT_BADGES")]
    pub badges: Option<String>,

    /// Comma-separated sections to render (default: all)
    #[arg(long, env = "INPUT_INCLUDE-SECTIONS")]
    pub include_sections: Option<String>,

    /// Comma-separated sections to leave out
    #[arg(long, env = "INPUT_EXCLUDE-SECTIONS")]
    pub exclude_sections: Option<String>,

    /// Starting heading level, 1 to 3 [default: 1]
    #[arg(long, env = "INPUT_HEADER-LEVEL")]
    pub header_level: Option<String>,

    /// Custom usage YAML shown under the generated usage block
    #[arg(long, env = "INPUT_EXAMPLE")]
    pub example: Option<String>,

    /// YAML file with additional usage examples
    #[arg(long, env = "INPUT_EXAMPLES-PATH")]
    pub examples_path: Option<String>,

    /// Link to contributing guidelines
    #[arg(long, env = "INPUT_CONTRIBUTING-URL")]
    pub contributing_url: Option<String>,

    /// `owner/repo` used in `uses:` lines (default: $GITHUB_REPOSITORY)
    #[arg(long, env = "INPUT_REPOSITORY-URL")]
    pub repository_url: Option<String>,

    /// Version used in `uses:` lines; `auto` picks the latest semver tag
    #[arg(long, env = "INPUT_VERSION")]
    pub version: Option<String>,

    /// Replaces the descriptor's description
    #[arg(long, env = "INPUT_DESCRIPTION")]
    pub description: Option<String>,
}

/// Returns the trimmed input if it is set and not blank.
pub(crate) fn present(input: Option<&String>) -> Option<&str> {
    input
        .map(String::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Parses a comma-separated section list.
///
/// Entries are trimmed and case-insensitive; empty entries are skipped.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] naming the first unknown section and
/// `input_name`.
///
/// # Examples
///
/// ```
/// use action_docs_cli::config::parse_sections;
/// use action_docs_core::SectionName;
///
/// let sections = parse_sections("inputs, BADGES ,", "include-sections").unwrap();
/// assert_eq!(sections, vec![SectionName::Inputs, SectionName::Badges]);
/// assert!(parse_sections("inputs, bogus", "include-sections").is_err());
/// ```
pub fn parse_sections(input: &str, input_name: &str) -> Result<Vec<SectionName>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<SectionName>().map_err(|_| Error::ConfigError {
                message: format!(
                    "Invalid section '{}' in {input_name}. Valid sections: {}",
                    part.to_lowercase(),
                    SectionName::valid_names()
                ),
            })
        })
        .collect()
}

/// Parses the header level.
///
/// Like `parseInt`, leading digits are read and anything after them ignored,
/// so `"2px"` is level 2.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] unless the number is 1, 2, or 3.
pub fn parse_header_level(input: &str) -> Result<HeaderLevel> {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end]
        .parse::<u8>()
        .ok()
        .and_then(|level| HeaderLevel::try_from(level).ok())
        .ok_or_else(|| Error::ConfigError {
            message: "header-level must be 1, 2, or 3".to_string(),
        })
}

/// Parses the badges JSON input.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] for malformed JSON, a non-array value, or
/// badges that fail validation.
pub fn parse_badges(input: &str) -> Result<Vec<Badge>> {
    let input = input.trim();
    if input.is_empty() || input == "[]" {
        return Ok(Vec::new());
    }

    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|err| Error::ConfigError {
            message: format!("Invalid badges JSON: {err}"),
        })?;
    if !value.is_array() {
        return Err(Error::ConfigError {
            message: "badges must be a JSON array".to_string(),
        });
    }
    badges_from_value(&value)
}

/// Splits `owner/repo` into its parts.
fn split_repository(repository: &str) -> Option<(&str, &str)> {
    let (owner, repo) = repository.split_once('/')?;
    (!owner.is_empty() && !repo.is_empty() && !repo.contains('/')).then_some((owner, repo))
}

/// Resolves the version shown in `uses:` lines.
///
/// An explicit version other than `auto` wins. Otherwise the latest
/// semver-like tag of `repository` is used, falling back to `main` when no
/// tag source is available, the repository has no usable tags, or listing
/// fails.
pub async fn resolve_version(
    input: Option<&str>,
    tags: Option<&dyn TagSource>,
    repository: &str,
) -> String {
    if let Some(version) = input
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != AUTO_VERSION)
    {
        return version.to_string();
    }

    let Some(tags) = tags else {
        debug!("no GITHUB_TOKEN available, using default version");
        return DEFAULT_VERSION.to_string();
    };
    let Some((owner, repo)) = split_repository(repository) else {
        debug!(repository, "could not determine repository, using default version");
        return DEFAULT_VERSION.to_string();
    };

    match tags.list_tags(owner, repo).await {
        Ok(names) if names.is_empty() => {
            debug!("no tags found, using default version");
            DEFAULT_VERSION.to_string()
        }
        Ok(names) => select_latest(&names).unwrap_or_else(|| {
            warn!(
                "No semver-like tags found (e.g., v1, v1.0.0). Using \"{DEFAULT_VERSION}\" as version."
            );
            DEFAULT_VERSION.to_string()
        }),
        Err(err) => {
            debug!(error = %err, "failed to detect version");
            DEFAULT_VERSION.to_string()
        }
    }
}

/// Builds a [`GeneratorConfig`] from [`ConfigInputs`].
///
/// # Examples
///
/// ```no_run
/// use action_docs_cli::config::{ConfigAssembler, ConfigInputs};
/// use action_docs_files::SandboxedFiles;
///
/// # async fn example() -> action_docs_core::Result<()> {
/// let files = SandboxedFiles::from_current_dir()?;
/// let inputs = ConfigInputs {
///     repository_url: Some("octo/greeter".to_string()),
///     version: Some("v1".to_string()),
///     ..ConfigInputs::default()
/// };
/// let config = ConfigAssembler::new(&files).assemble(&inputs).await?;
/// assert_eq!(config.version, "v1");
/// # Ok(())
/// # }
/// ```
pub struct ConfigAssembler<'a> {
    files: &'a dyn FileAccess,
    tags: Option<&'a dyn TagSource>,
    github_repository: Option<String>,
}

impl fmt::Debug for ConfigAssembler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigAssembler")
            .field("has_tag_source", &self.tags.is_some())
            .field("github_repository", &self.github_repository)
            .finish_non_exhaustive()
    }
}

impl<'a> ConfigAssembler<'a> {
    /// Creates an assembler that reads example files through `files`.
    #[must_use]
    pub const fn new(files: &'a dyn FileAccess) -> Self {
        Self {
            files,
            tags: None,
            github_repository: None,
        }
    }

    /// Enables version auto-detection through `tags`.
    #[must_use]
    pub const fn with_tag_source(mut self, tags: &'a dyn TagSource) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Sets the repository reported by the runner (`GITHUB_REPOSITORY`).
    #[must_use]
    pub fn with_github_repository(mut self, repository: Option<String>) -> Self {
        self.github_repository = repository
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        self
    }

    fn repository(&self, inputs: &ConfigInputs) -> Result<String> {
        present(inputs.repository_url.as_ref())
            .map(str::to_string)
            .or_else(|| self.github_repository.clone())
            .ok_or_else(|| Error::ConfigError {
                message: "Could not detect repository. Please provide repository-url input."
                    .to_string(),
            })
    }

    /// Validates every input and assembles the config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] for an invalid section list, header
    /// level, badges input, examples file or a missing repository, and file
    /// access errors from reading the examples file.
    pub async fn assemble(&self, inputs: &ConfigInputs) -> Result<GeneratorConfig> {
        let badges = present(inputs.badges.as_ref())
            .map(parse_badges)
            .transpose()?
            .unwrap_or_default();
        let include_sections = present(inputs.include_sections.as_ref())
            .map(|s| parse_sections(s, "include-sections"))
            .transpose()?
            .unwrap_or_default();
        let exclude_sections = present(inputs.exclude_sections.as_ref())
            .map(|s| parse_sections(s, "exclude-sections"))
            .transpose()?
            .unwrap_or_default();
        let header_level = present(inputs.header_level.as_ref())
            .map(parse_header_level)
            .transpose()?
            .unwrap_or_default();
        let repository_url = self.repository(inputs)?;

        let examples = match present(inputs.examples_path.as_ref()) {
            Some(path) => load_examples(self.files, path).await?,
            None => Vec::new(),
        };

        let version =
            resolve_version(present(inputs.version.as_ref()), self.tags, &repository_url).await;

        let owned = |input: Option<&String>| present(input).map(str::to_string);
        let config = GeneratorConfig {
            action_path: owned(inputs.action_path.as_ref())
                .unwrap_or_else(|| DEFAULT_ACTION_PATH.to_string()),
            output_path: owned(inputs.output_path.as_ref())
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            template_path: owned(inputs.template_path.as_ref()),
            license: owned(inputs.license.as_ref()).unwrap_or_else(|| DEFAULT_LICENSE.to_string()),
            badges,
            include_sections,
            exclude_sections,
            example: owned(inputs.example.as_ref()),
            examples,
            contributing_url: owned(inputs.contributing_url.as_ref()),
            repository_url,
            version,
            header_level,
            description: owned(inputs.description.as_ref()),
        };

        debug!(
            action_path = %config.action_path,
            output_path = %config.output_path,
            template_path = config.template_path.as_deref().unwrap_or("(default)"),
            license = %config.license,
            repository = %config.repository_url,
            version = %config.version,
            examples = config.examples.len(),
            "configuration loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==== Sections ====

    #[test]
    fn test_parse_sections_trims_and_skips_empty() {
        assert_eq!(
            parse_sections(" title ,, Usage ,", "include-sections").unwrap(),
            vec![SectionName::Title, SectionName::Usage]
        );
        assert!(parse_sections("  ", "include-sections").unwrap().is_empty());
    }

    #[test]
    fn test_parse_sections_unknown_names_input_and_valid_list() {
        let err = parse_sections("inputs, BADGES , bogus", "exclude-sections").unwrap_err();
        assert!(err.is_config_error());
        let message = err.to_string();
        assert!(message.contains("Invalid section 'bogus' in exclude-sections"));
        for section in SectionName::ALL {
            assert!(message.contains(section.as_str()), "{section}");
        }
    }

    // ==== Header level ====

    #[test]
    fn test_parse_header_level() {
        assert_eq!(parse_header_level("1").unwrap().get(), 1);
        assert_eq!(parse_header_level(" 3 ").unwrap().get(), 3);
        assert_eq!(parse_header_level("2px").unwrap().get(), 2);
        for bad in ["0", "4", "abc", "", "-1", "300"] {
            let err = parse_header_level(bad).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Configuration error: header-level must be 1, 2, or 3",
                "{bad}"
            );
        }
    }

    // ==== Badges ====

    #[test]
    fn test_parse_badges_empty_forms() {
        assert!(parse_badges("").unwrap().is_empty());
        assert!(parse_badges("[]").unwrap().is_empty());
        assert!(parse_badges(" [ ] ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_badges_valid() {
        let badges =
            parse_badges(r#"[{"label":"build","message":"passing","color":"green"}]"#).unwrap();
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].label, "build");
        assert!(badges[0].url.is_none());
    }

    #[test]
    fn test_parse_badges_errors() {
        let err = parse_badges("[{").unwrap_err();
        assert!(err.to_string().contains("Invalid badges JSON: "));

        let err = parse_badges(r#"{"label":"x"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: badges must be a JSON array"
        );

        let err = parse_badges(
            r#"[{"label":"x","message":"y","color":"red","url":"http://127.0.0.1/badge.svg"}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Badge validation failed:"));
    }

    // ==== Repository ====

    #[test]
    fn test_split_repository() {
        assert_eq!(split_repository("octo/greeter"), Some(("octo", "greeter")));
        assert_eq!(split_repository("octo"), None);
        assert_eq!(split_repository("/greeter"), None);
        assert_eq!(split_repository("a/b/c"), None);
    }
}
