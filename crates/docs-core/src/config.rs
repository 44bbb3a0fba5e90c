//! Generator configuration types.
//!
//! [`GeneratorConfig`] is assembled once per run from CLI flags and
//! environment variables and is immutable afterwards. The types it is made of
//! ([`SectionName`], [`HeaderLevel`], [`Badge`], [`Example`]) carry their own
//! parsing rules so that an assembled config is always well-formed.
//!
//! # Examples
//!
//! ```
//! use action_docs_core::{GeneratorConfig, HeaderLevel, SectionName};
//!
//! let config = GeneratorConfig::new("octo/greeter", "v1")
//!     .with_header_level(HeaderLevel::try_from(2).unwrap())
//!     .with_exclude_sections(vec![SectionName::Permissions]);
//!
//! assert_eq!(config.license, "MIT");
//! assert_eq!(config.header_level.get(), 2);
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default descriptor path.
pub const DEFAULT_ACTION_PATH: &str = "./action.yaml";

/// Default README output path.
pub const DEFAULT_OUTPUT_PATH: &str = "./README.md";

/// Default license name.
pub const DEFAULT_LICENSE: &str = "MIT";

/// A named, independently includable block of the README.
///
/// Variants are declared in render order; [`SectionName::ALL`] preserves it.
///
/// # Examples
///
/// ```
/// use action_docs_core::SectionName;
///
/// let section: SectionName = "Inputs".parse().unwrap();
/// assert_eq!(section, SectionName::Inputs);
/// assert_eq!(section.as_str(), "inputs");
/// assert!("bogus".parse::<SectionName>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionName {
    /// Action name heading
    Title,
    /// Badge row
    Badges,
    /// Action description paragraph
    Description,
    /// Runner requirements
    Requirements,
    /// Workflow permissions block
    Permissions,
    /// Inputs table
    Inputs,
    /// Outputs table
    Outputs,
    /// Generated usage snippet
    Usage,
    /// User-supplied examples
    Examples,
    /// Contributing note
    Contributing,
    /// License footer
    License,
}

impl SectionName {
    /// Every section, in render order.
    pub const ALL: [Self; 11] = [
        Self::Title,
        Self::Badges,
        Self::Description,
        Self::Requirements,
        Self::Permissions,
        Self::Inputs,
        Self::Outputs,
        Self::Usage,
        Self::Examples,
        Self::Contributing,
        Self::License,
    ];

    /// Returns the lowercase name used in inputs and templates.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Badges => "badges",
            Self::Description => "description",
            Self::Requirements => "requirements",
            Self::Permissions => "permissions",
            Self::Inputs => "inputs",
            Self::Outputs => "outputs",
            Self::Usage => "usage",
            Self::Examples => "examples",
            Self::Contributing => "contributing",
            Self::License => "license",
        }
    }

    /// Returns all section names joined with `", "`.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_docs_core::SectionName;
    ///
    /// assert!(SectionName::valid_names().starts_with("title, badges, description"));
    /// ```
    #[must_use]
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == lowered)
            .ok_or_else(|| Error::ConfigError {
                message: format!(
                    "Invalid section '{lowered}'. Valid sections: {}",
                    Self::valid_names()
                ),
            })
    }
}

/// Starting heading depth for the README (1, 2, or 3).
///
/// # Examples
///
/// ```
/// use action_docs_core::HeaderLevel;
///
/// assert_eq!(HeaderLevel::default().get(), 1);
/// assert!(HeaderLevel::try_from(3).is_ok());
/// assert!(HeaderLevel::try_from(0).is_err());
/// assert!(HeaderLevel::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeaderLevel(u8);

impl HeaderLevel {
    /// Shallowest allowed level.
    pub const MIN: u8 = 1;

    /// Deepest allowed level.
    pub const MAX: u8 = 3;

    /// Returns the level as a number.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Default for HeaderLevel {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for HeaderLevel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::ConfigError {
                message: "header-level must be 1, 2, or 3".to_string(),
            })
        }
    }
}

impl From<HeaderLevel> for u8 {
    fn from(level: HeaderLevel) -> Self {
        level.0
    }
}

impl fmt::Display for HeaderLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A status badge shown below the title.
///
/// Either rendered from `label`/`message`/`color` as a shields.io image or,
/// when `markdown` is set, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Left-hand text
    pub label: String,
    /// Right-hand text
    pub message: String,
    /// shields.io color name or hex
    pub color: String,
    /// Link target; must be a public http(s) URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Raw markdown that replaces the generated badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

/// A user-supplied usage example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Example heading
    pub title: String,
    /// Paragraph shown under the heading
    pub description: String,
    /// Step name override (defaults to the action name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Version override (defaults to the resolved version)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Input values, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with: Option<IndexMap<String, String>>,
}

/// Fully assembled generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Descriptor path
    pub action_path: String,
    /// README output path
    pub output_path: String,
    /// Custom template path
    pub template_path: Option<String>,
    /// License name
    pub license: String,
    /// Badges, in display order
    pub badges: Vec<Badge>,
    /// Sections to include (empty means all)
    pub include_sections: Vec<SectionName>,
    /// Sections to drop
    pub exclude_sections: Vec<SectionName>,
    /// Custom usage YAML shown verbatim
    pub example: Option<String>,
    /// User-supplied examples
    pub examples: Vec<Example>,
    /// Contributing guidelines URL
    pub contributing_url: Option<String>,
    /// `owner/repo`
    pub repository_url: String,
    /// Version used in `uses:` lines
    pub version: String,
    /// Starting heading depth
    pub header_level: HeaderLevel,
    /// Description override
    pub description: Option<String>,
}

impl GeneratorConfig {
    /// Creates a config with defaults for everything except repository and version.
    #[must_use]
    pub fn new(repository_url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            action_path: DEFAULT_ACTION_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            template_path: None,
            license: DEFAULT_LICENSE.to_string(),
            badges: Vec::new(),
            include_sections: Vec::new(),
            exclude_sections: Vec::new(),
            example: None,
            examples: Vec::new(),
            contributing_url: None,
            repository_url: repository_url.into(),
            version: version.into(),
            header_level: HeaderLevel::default(),
            description: None,
        }
    }

    /// Sets the descriptor path.
    #[must_use]
    pub fn with_action_path(mut self, path: impl Into<String>) -> Self {
        self.action_path = path.into();
        self
    }

    /// Sets the README output path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Sets the header level.
    #[must_use]
    pub const fn with_header_level(mut self, level: HeaderLevel) -> Self {
        self.header_level = level;
        self
    }

    /// Sets the included sections.
    #[must_use]
    pub fn with_include_sections(mut self, sections: Vec<SectionName>) -> Self {
        self.include_sections = sections;
        self
    }

    /// Sets the excluded sections.
    #[must_use]
    pub fn with_exclude_sections(mut self, sections: Vec<SectionName>) -> Self {
        self.exclude_sections = sections;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let names: Vec<_> = SectionName::ALL.iter().map(SectionName::as_str).collect();
        assert_eq!(
            names,
            vec![
                "title",
                "badges",
                "description",
                "requirements",
                "permissions",
                "inputs",
                "outputs",
                "usage",
                "examples",
                "contributing",
                "license",
            ]
        );
    }

    #[test]
    fn test_section_parse_case_insensitive() {
        assert_eq!(
            " BADGES ".parse::<SectionName>().unwrap(),
            SectionName::Badges
        );
        let err = "bogus".parse::<SectionName>().unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_section_serde_lowercase() {
        let json = serde_json::to_string(&SectionName::Contributing).unwrap();
        assert_eq!(json, "\"contributing\"");
        let back: SectionName = serde_json::from_str("\"usage\"").unwrap();
        assert_eq!(back, SectionName::Usage);
    }

    #[test]
    fn test_header_level_bounds() {
        for value in 1..=3 {
            assert_eq!(HeaderLevel::try_from(value).unwrap().get(), value);
        }
        let err = HeaderLevel::try_from(7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: header-level must be 1, 2, or 3"
        );
        assert!(serde_json::from_str::<HeaderLevel>("5").is_err());
    }

    #[test]
    fn test_badge_optional_fields_omitted() {
        let badge: Badge =
            serde_json::from_str(r#"{"label":"build","message":"passing","color":"green"}"#)
                .unwrap();
        assert!(badge.url.is_none());
        assert!(badge.markdown.is_none());
        let json = serde_json::to_value(&badge).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_example_with_keeps_order() {
        let example: Example = serde_json::from_str(
            r#"{"title":"Basic","description":"Basic usage example","with":{"z":"1","a":"2"}}"#,
        )
        .unwrap();
        let keys: Vec<_> = example.with.unwrap().into_keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_generator_config_defaults() {
        let config = GeneratorConfig::new("o/r", "main");
        assert_eq!(config.action_path, DEFAULT_ACTION_PATH);
        assert_eq!(config.output_path, DEFAULT_OUTPUT_PATH);
        assert_eq!(config.license, "MIT");
        assert_eq!(config.header_level, HeaderLevel::default());
        assert!(config.include_sections.is_empty());
    }

    #[test]
    fn test_generator_config_camel_case() {
        let config = GeneratorConfig::new("o/r", "v1");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["repositoryUrl"], "o/r");
        assert_eq!(json["headerLevel"], 1);
    }
}
