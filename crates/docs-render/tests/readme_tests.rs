//! End-to-end rendering of the built-in README template.

use action_docs_core::{
    ActionInput, ActionMetadata, ActionOutput, ActionRuns, Badge, Example, GeneratorConfig,
    HeaderLevel, SectionName,
};
use action_docs_files::SandboxedFiles;
use action_docs_render::{ReadmeGenerator, generate_readme};
use indexmap::IndexMap;
use tempfile::TempDir;

fn input(id: &str, description: &str, required: bool, default: Option<&str>) -> ActionInput {
    ActionInput {
        id: id.to_string(),
        description: description.to_string(),
        required,
        default: default.map(str::to_string),
    }
}

fn greeter() -> ActionMetadata {
    ActionMetadata {
        name: "Greeter".to_string(),
        description: "Says hello".to_string(),
        inputs: vec![
            input("who", "Who to greet", true, None),
            input("greeting", "Greeting word", false, Some("Hello")),
        ],
        outputs: vec![ActionOutput {
            id: "message".to_string(),
            description: "The rendered message".to_string(),
        }],
        runs: ActionRuns {
            using: "node20".to_string(),
        },
    }
}

fn config() -> GeneratorConfig {
    let mut config = GeneratorConfig::new("octo/greeter", "v1");
    config.badges = vec![Badge {
        label: "build".to_string(),
        message: "passing".to_string(),
        color: "green".to_string(),
        url: Some("https://example.com/ci".to_string()),
        markdown: None,
    }];
    config
}

fn workspace() -> (TempDir, SandboxedFiles) {
    let temp = TempDir::new().unwrap();
    let files = SandboxedFiles::new(temp.path());
    (temp, files)
}

async fn render(metadata: &ActionMetadata, config: &GeneratorConfig) -> String {
    let (_temp, files) = workspace();
    ReadmeGenerator::new(&files)
        .render(metadata, config)
        .await
        .unwrap()
        .content
}

// ============================================================================
// Sections
// ============================================================================

#[tokio::test]
async fn test_all_sections_rendered() {
    let readme = render(&greeter(), &config()).await;

    assert!(readme.contains("# Greeter"));
    assert!(readme.contains(
        "[![build](https://img.shields.io/badge/build-passing-green)](https://example.com/ci)"
    ));
    assert!(readme.contains("Says hello"));
    assert!(readme.contains("## Requirements"));
    assert!(readme.contains("- GitHub Actions runner with Node.js 20+"));
    assert!(readme.contains("## Permissions"));
    assert!(readme.contains("  contents: read"));
    assert!(readme.contains("## Inputs"));
    assert!(readme.contains("## Outputs"));
    assert!(readme.contains("## Usage"));
    assert!(readme.contains("## Examples"));
    assert!(readme.contains("## Contributing"));
    assert!(readme.contains("Contributions are welcome!"));
    assert!(readme.contains("## License"));
    assert!(readme.contains(
        "This project is licensed under the MIT License - see the [LICENSE](LICENSE) file for details."
    ));
    assert!(readme.contains("*Generated with [Action Docs Generator]"));
}

#[tokio::test]
async fn test_excluded_sections_omitted() {
    let config = config().with_exclude_sections(vec![
        SectionName::Badges,
        SectionName::Permissions,
        SectionName::License,
    ]);
    let readme = render(&greeter(), &config).await;

    assert!(readme.contains("# Greeter"));
    assert!(readme.contains("## Inputs"));
    assert!(!readme.contains("img.shields.io"));
    assert!(!readme.contains("## Permissions"));
    assert!(!readme.contains("## License"));
    assert!(!readme.contains("Generated with"));
}

#[tokio::test]
async fn test_include_sections_only() {
    let config = config().with_include_sections(vec![SectionName::Title, SectionName::Outputs]);
    let readme = render(&greeter(), &config).await;

    assert!(readme.contains("# Greeter"));
    assert!(readme.contains("| `message` | The rendered message |"));
    assert!(!readme.contains("Says hello"));
    assert!(!readme.contains("## Inputs"));
    assert!(!readme.contains("## Usage"));
}

#[tokio::test]
async fn test_header_level_shifts_headings() {
    let config = config().with_header_level(HeaderLevel::try_from(2).unwrap());
    let readme = render(&greeter(), &config).await;

    assert!(readme.contains("## Greeter"));
    assert!(readme.contains("### Inputs"));
    assert!(readme.contains("#### Basic Usage"));
    assert!(!readme.lines().any(|line| line == "# Greeter"));
}

// ============================================================================
// Tables and usage
// ============================================================================

#[tokio::test]
async fn test_inputs_table_rows() {
    let readme = render(&greeter(), &config()).await;

    assert!(readme.contains("| Name | Description | Required | Default |"));
    assert!(readme.contains("| `who` | Who to greet | Yes | - |"));
    assert!(readme.contains("| `greeting` | Greeting word | No | `Hello` |"));
}

#[tokio::test]
async fn test_table_cells_escape_pipes() {
    let mut metadata = greeter();
    metadata.inputs = vec![input("mode", "Either a|b\nor c", false, Some("a|b"))];
    let readme = render(&metadata, &config()).await;

    assert!(readme.contains("| `mode` | Either a\\|b or c | No | `a\\|b` |"));
}

#[tokio::test]
async fn test_usage_with_required_inputs() {
    let readme = render(&greeter(), &config()).await;

    assert!(readme.contains("- name: Greeter"));
    assert!(readme.contains("  uses: octo/greeter@v1"));
    assert!(readme.contains("  with:"));
    assert!(readme.contains("    who: # Required: Who to greet"));
    assert!(readme.contains("    # greeting: 'Hello'"));
}

#[tokio::test]
async fn test_usage_without_required_inputs() {
    let mut metadata = greeter();
    metadata.inputs = vec![
        input("greeting", "Greeting word", false, Some("Hello")),
        input("punctuation", "Trailing mark", false, None),
    ];
    let readme = render(&metadata, &config()).await;

    assert!(readme.contains("  # with:"));
    assert!(readme.contains("  #   greeting: 'Hello'"));
    assert!(readme.contains("  #   punctuation: # Trailing mark"));
    assert!(!readme.contains("Required:"));
}

#[tokio::test]
async fn test_docker_requirements() {
    let mut metadata = greeter();
    metadata.runs.using = "docker".to_string();
    let readme = render(&metadata, &config()).await;

    assert!(readme.contains("- Docker-enabled GitHub Actions runner"));
    assert!(!readme.contains("Node.js"));
}

#[tokio::test]
async fn test_markdown_badge_verbatim() {
    let mut config = config();
    config.badges = vec![Badge {
        label: "x".to_string(),
        message: "y".to_string(),
        color: "blue".to_string(),
        url: None,
        markdown: Some("![custom](https://example.com/b.svg)".to_string()),
    }];
    let readme = render(&greeter(), &config).await;

    assert!(readme.contains("![custom](https://example.com/b.svg)"));
    assert!(!readme.contains("img.shields.io"));
}

#[tokio::test]
async fn test_badge_without_url_links_to_repo_root() {
    let mut config = config();
    config.badges[0].url = None;
    config.badges[0].label = "node-version".to_string();
    let readme = render(&greeter(), &config).await;

    assert!(readme.contains("(https://img.shields.io/badge/node--version-passing-green)](.)"));
}

// ============================================================================
// Examples and optional content
// ============================================================================

#[tokio::test]
async fn test_examples_rendered() {
    let mut with = IndexMap::new();
    with.insert("who".to_string(), "world".to_string());
    with.insert("script".to_string(), "echo a\necho b".to_string());

    let mut config = config();
    config.examples = vec![Example {
        title: "Multi-line".to_string(),
        description: "Runs a script".to_string(),
        name: Some("Say it".to_string()),
        version: Some("v2".to_string()),
        with: Some(with),
    }];
    let readme = render(&greeter(), &config).await;

    assert!(readme.contains("### Multi-line"));
    assert!(readme.contains("Runs a script"));
    assert!(readme.contains("- name: Say it"));
    assert!(readme.contains("  uses: octo/greeter@v2"));
    assert!(readme.contains("    who: world"));
    assert!(readme.contains("    script: |\n      echo a\n      echo b"));
    assert!(!readme.contains("### Basic Usage"));
}

#[tokio::test]
async fn test_example_defaults_to_action_name_and_version() {
    let mut config = config();
    config.examples = vec![Example {
        title: "Plain".to_string(),
        description: "Nothing special".to_string(),
        name: None,
        version: None,
        with: None,
    }];
    let readme = render(&greeter(), &config).await;

    assert!(readme.contains("### Plain"));
    assert_eq!(readme.matches("- name: Greeter").count(), 2);
    assert_eq!(readme.matches("  uses: octo/greeter@v1").count(), 2);
}

#[tokio::test]
async fn test_basic_usage_fallback() {
    let readme = render(&greeter(), &config()).await;

    assert!(readme.contains("### Basic Usage"));
    assert!(readme.contains("      - uses: actions/checkout@v4"));
    assert!(readme.contains("          who: # Required"));
}

#[tokio::test]
async fn test_custom_example_and_contributing_url() {
    let mut config = config();
    config.example = Some("- uses: octo/greeter@v1\n  with:\n    who: me".to_string());
    config.contributing_url = Some("https://example.com/CONTRIBUTING.md".to_string());
    let readme = render(&greeter(), &config).await;

    assert!(readme.contains("### Custom Example"));
    assert!(readme.contains("- uses: octo/greeter@v1\n  with:\n    who: me"));
    assert!(readme.contains("Please see [CONTRIBUTING.md](https://example.com/CONTRIBUTING.md)"));
    assert!(!readme.contains("Contributions are welcome!"));
}

#[tokio::test]
async fn test_description_override_and_license() {
    let mut config = config();
    config.description = Some("A friendlier greeter".to_string());
    config.license = "Apache-2.0".to_string();
    let readme = render(&greeter(), &config).await;

    assert!(readme.contains("A friendlier greeter"));
    assert!(!readme.contains("Says hello"));
    assert!(readme.contains("licensed under the Apache-2.0 License"));
}

// ============================================================================
// Templates and writing
// ============================================================================

#[tokio::test]
async fn test_custom_template_used_when_present() {
    let (temp, files) = workspace();
    std::fs::write(
        temp.path().join("custom.hbs"),
        "{{h 1}} {{action.name}} ({{join helpers.sections \", \"}})",
    )
    .unwrap();

    let mut config = config().with_include_sections(vec![SectionName::Title, SectionName::Usage]);
    config.template_path = Some("custom.hbs".to_string());

    let rendered = ReadmeGenerator::new(&files)
        .render(&greeter(), &config)
        .await
        .unwrap();
    assert_eq!(rendered.content, "# Greeter (title, usage)");
}

#[tokio::test]
async fn test_missing_custom_template_falls_back() {
    let mut config = config();
    config.template_path = Some("missing.hbs".to_string());
    let readme = render(&greeter(), &config).await;
    assert!(readme.contains("## Inputs"));
}

#[tokio::test]
async fn test_custom_template_outside_workspace_rejected() {
    let (_temp, files) = workspace();
    let mut config = config();
    config.template_path = Some("../template.hbs".to_string());

    let err = ReadmeGenerator::new(&files)
        .render(&greeter(), &config)
        .await
        .unwrap_err();
    assert!(err.is_path_traversal());
}

#[tokio::test]
async fn test_broken_custom_template() {
    let (temp, files) = workspace();
    std::fs::write(temp.path().join("broken.hbs"), "{{#each action.inputs}}").unwrap();
    let mut config = config();
    config.template_path = Some("broken.hbs".to_string());

    let err = ReadmeGenerator::new(&files)
        .render(&greeter(), &config)
        .await
        .unwrap_err();
    assert!(err.is_template_error());
    assert!(err.to_string().contains("Failed to compile template"));
}

#[tokio::test]
async fn test_generate_writes_readme() {
    let (temp, files) = workspace();
    let config = config().with_output_path("./README.md");

    let result = generate_readme(&greeter(), &config, &files).await.unwrap();

    assert_eq!(result.output_path, temp.path().join("README.md"));
    assert_eq!(result.sections_generated, SectionName::ALL.to_vec());
    let written = std::fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert_eq!(written, result.content);
}

#[tokio::test]
async fn test_generate_into_missing_directory_fails() {
    let (_temp, files) = workspace();
    let config = config().with_output_path("docs/README.md");

    let err = generate_readme(&greeter(), &config, &files)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "IO_ERROR");
}

#[tokio::test]
async fn test_generation_result_serializes_camel_case() {
    let (_temp, files) = workspace();
    let result = generate_readme(&greeter(), &config(), &files).await.unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["outputPath"].is_string());
    assert_eq!(json["sectionsGenerated"][0], "title");
}
