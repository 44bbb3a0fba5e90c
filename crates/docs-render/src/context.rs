//! Section selection and template context assembly.

use action_docs_core::{ActionMetadata, Badge, Example, GeneratorConfig, SectionName};
use chrono::{DateTime, Datelike, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Selects the sections to render.
///
/// Starts from `include_sections` (or all sections when it is empty) and
/// drops every excluded section, keeping the starting order.
///
/// # Examples
///
/// ```
/// use action_docs_core::{GeneratorConfig, SectionName};
/// use action_docs_render::determine_sections;
///
/// let config = GeneratorConfig::new("o/r", "v1")
///     .with_include_sections(vec![SectionName::Usage, SectionName::Title])
///     .with_exclude_sections(vec![SectionName::Title]);
/// assert_eq!(determine_sections(&config), vec![SectionName::Usage]);
/// ```
#[must_use]
pub fn determine_sections(config: &GeneratorConfig) -> Vec<SectionName> {
    let candidates: &[SectionName] = if config.include_sections.is_empty() {
        &SectionName::ALL
    } else {
        &config.include_sections
    };
    candidates
        .iter()
        .copied()
        .filter(|section| !config.exclude_sections.contains(section))
        .collect()
}

/// Data exposed to README templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContext {
    /// Action metadata with the description override applied
    pub action: ActionMetadata,
    /// Rendering options
    pub config: ConfigContext,
    /// Values computed at render time
    pub helpers: RenderInfo,
    /// Every section name mapped to whether it is rendered
    pub has_section: IndexMap<&'static str, bool>,
}

/// The parts of [`GeneratorConfig`] templates can see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigContext {
    /// License name
    pub license: String,
    /// Badges, in display order
    pub badges: Vec<Badge>,
    /// User-supplied examples
    pub examples: Vec<Example>,
    /// `owner/repo`
    pub repository_url: String,
    /// Contributing guidelines URL
    pub contributing_url: Option<String>,
    /// Custom usage YAML
    pub example: Option<String>,
    /// Version used in `uses:` lines
    pub version: String,
    /// Starting heading depth
    pub header_level: u8,
}

/// Render-time values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderInfo {
    /// Current year
    pub year: i32,
    /// Render date as `YYYY-MM-DD`
    pub generated_at: String,
    /// Rendered sections, in order
    pub sections: Vec<SectionName>,
}

/// Builds the template context for the current time.
#[must_use]
pub fn build_context(
    metadata: &ActionMetadata,
    config: &GeneratorConfig,
    sections: &[SectionName],
) -> TemplateContext {
    build_context_at(metadata, config, sections, Utc::now())
}

/// Builds the template context as of `now`.
#[must_use]
pub fn build_context_at(
    metadata: &ActionMetadata,
    config: &GeneratorConfig,
    sections: &[SectionName],
    now: DateTime<Utc>,
) -> TemplateContext {
    let has_section = SectionName::ALL
        .iter()
        .map(|section| (section.as_str(), sections.contains(section)))
        .collect();

    TemplateContext {
        action: metadata.with_description_override(config.description.as_deref()),
        config: ConfigContext {
            license: config.license.clone(),
            badges: config.badges.clone(),
            examples: config.examples.clone(),
            repository_url: config.repository_url.clone(),
            contributing_url: config.contributing_url.clone(),
            example: config.example.clone(),
            version: config.version.clone(),
            header_level: config.header_level.get(),
        },
        helpers: RenderInfo {
            year: now.year(),
            generated_at: now.format("%Y-%m-%d").to_string(),
            sections: sections.to_vec(),
        },
        has_section,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use action_docs_core::ActionRuns;
    use chrono::TimeZone;

    fn metadata() -> ActionMetadata {
        ActionMetadata {
            name: "Greeter".to_string(),
            description: "Says hello".to_string(),
            inputs: vec![],
            outputs: vec![],
            runs: ActionRuns {
                using: "node20".to_string(),
            },
        }
    }

    #[test]
    fn test_all_sections_by_default() {
        let config = GeneratorConfig::new("o/r", "v1");
        assert_eq!(determine_sections(&config), SectionName::ALL.to_vec());
    }

    #[test]
    fn test_exclude_from_all() {
        let config = GeneratorConfig::new("o/r", "v1")
            .with_exclude_sections(vec![SectionName::Badges, SectionName::License]);
        let sections = determine_sections(&config);
        assert_eq!(sections.len(), 9);
        assert!(!sections.contains(&SectionName::Badges));
        assert!(!sections.contains(&SectionName::License));
        assert_eq!(sections[0], SectionName::Title);
    }

    #[test]
    fn test_include_keeps_given_order() {
        let config = GeneratorConfig::new("o/r", "v1")
            .with_include_sections(vec![SectionName::Inputs, SectionName::Title]);
        assert_eq!(
            determine_sections(&config),
            vec![SectionName::Inputs, SectionName::Title]
        );
    }

    #[test]
    fn test_context_shape() {
        let mut config = GeneratorConfig::new("octo/greeter", "v2");
        config.description = Some("Overridden".to_string());
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
        let sections = [SectionName::Title, SectionName::Usage];

        let context = build_context_at(&metadata(), &config, &sections, now);
        let json = serde_json::to_value(&context).unwrap();

        assert_eq!(json["action"]["description"], "Overridden");
        assert_eq!(json["config"]["repositoryUrl"], "octo/greeter");
        assert_eq!(json["config"]["headerLevel"], 1);
        assert_eq!(json["helpers"]["year"], 2026);
        assert_eq!(json["helpers"]["generatedAt"], "2026-03-04");
        assert_eq!(json["helpers"]["sections"][1], "usage");
        assert_eq!(json["hasSection"].as_object().unwrap().len(), 11);
        assert_eq!(json["hasSection"]["title"], true);
        assert_eq!(json["hasSection"]["badges"], false);
    }

    #[test]
    fn test_empty_description_override_ignored() {
        let mut config = GeneratorConfig::new("o/r", "v1");
        config.description = Some(String::new());
        let context = build_context(&metadata(), &config, &[]);
        assert_eq!(context.action.description, "Says hello");
    }
}
