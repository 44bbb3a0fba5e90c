//! End-to-end tests for the generate and validate commands.

use action_docs_cli::commands::common::RunnerEnv;
use action_docs_cli::commands::generate::{generate, publish};
use action_docs_cli::commands::validate::validate;
use action_docs_cli::config::ConfigInputs;
use action_docs_cli::runner::exit_code_for;
use action_docs_core::SectionName;
use action_docs_core::cli::ExitCode;
use action_docs_files::SandboxedFiles;
use tempfile::TempDir;

const ACTION_YAML: &str = r"
name: Greeter
description: Says hello
inputs:
  who:
    description: Who to greet
    required: true
  greeting:
    description: Greeting word
    default: Hello
outputs:
  message:
    description: The rendered message
runs:
  using: node20
  main: dist/index.js
";

fn workspace(action: &str) -> (TempDir, SandboxedFiles) {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("action.yml"), action).unwrap();
    let files = SandboxedFiles::new(temp.path());
    (temp, files)
}

fn inputs() -> ConfigInputs {
    ConfigInputs {
        action_path: Some("action".to_string()),
        repository_url: Some("octo/greeter".to_string()),
        version: Some("v1".to_string()),
        ..ConfigInputs::default()
    }
}

// ============================================================================
// generate
// ============================================================================

#[tokio::test]
async fn test_generate_writes_readme() {
    let (temp, files) = workspace(ACTION_YAML);

    let report = generate(&files, &inputs(), &RunnerEnv::default())
        .await
        .unwrap();

    assert_eq!(report.action, "Greeter");
    assert_eq!(report.version, "v1");
    let written = std::fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert_eq!(written, report.result.content);
    assert!(written.contains("# Greeter\n"));
    assert!(written.contains("uses: octo/greeter@v1"));
    assert!(written.contains("| `who` | Who to greet | Yes | - |"));
}

#[tokio::test]
async fn test_generate_uses_runner_repository() {
    let (temp, files) = workspace(ACTION_YAML);
    let runner = RunnerEnv {
        repository: Some("runner/greeter".to_string()),
        ..RunnerEnv::default()
    };
    let inputs = ConfigInputs {
        repository_url: None,
        version: None,
        ..inputs()
    };

    let report = generate(&files, &inputs, &runner).await.unwrap();

    assert_eq!(report.version, "main");
    let written = std::fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert!(written.contains("uses: runner/greeter@main"));
}

#[tokio::test]
async fn test_generate_then_publish_to_runner_files() {
    let (temp, files) = workspace(ACTION_YAML);
    let runner = RunnerEnv {
        output_file: Some(temp.path().join("github_output")),
        summary_file: Some(temp.path().join("step_summary")),
        ..RunnerEnv::default()
    };
    let inputs = ConfigInputs {
        include_sections: Some("title,description".to_string()),
        ..inputs()
    };

    let report = generate(&files, &inputs, &runner).await.unwrap();
    publish(&report, &runner).await.unwrap();

    assert_eq!(
        report.result.sections_generated,
        vec![SectionName::Title, SectionName::Description]
    );
    let outputs = std::fs::read_to_string(temp.path().join("github_output")).unwrap();
    assert!(outputs.contains("readme-path<<ghadelimiter_"));
    assert!(outputs.contains("content<<ghadelimiter_"));
    assert!(outputs.contains("\n[\"title\",\"description\"]\n"));
    let summary = std::fs::read_to_string(temp.path().join("step_summary")).unwrap();
    assert!(summary.contains("## README Generated"));
    assert!(summary.contains("| Greeter |"));
}

#[tokio::test]
async fn test_generate_missing_descriptor_is_file_error() {
    let (_temp, files) = workspace(ACTION_YAML);
    let inputs = ConfigInputs {
        action_path: Some("nested/action".to_string()),
        ..inputs()
    };

    let err = generate(&files, &inputs, &RunnerEnv::default())
        .await
        .unwrap_err();

    assert_eq!(exit_code_for(&err), ExitCode::FILE_ERROR);
    assert!(format!("{err:#}").contains("nested/action"));
}

#[tokio::test]
async fn test_generate_invalid_descriptor_is_invalid_input() {
    let (_temp, files) = workspace("name: Greeter\nruns:\n  using: node20\n");

    let err = generate(&files, &inputs(), &RunnerEnv::default())
        .await
        .unwrap_err();

    assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
}

#[tokio::test]
async fn test_generate_output_outside_workspace_rejected() {
    let (_temp, files) = workspace(ACTION_YAML);
    let inputs = ConfigInputs {
        output_path: Some("../README.md".to_string()),
        ..inputs()
    };

    let err = generate(&files, &inputs, &RunnerEnv::default())
        .await
        .unwrap_err();

    assert_eq!(exit_code_for(&err), ExitCode::FILE_ERROR);
}

#[tokio::test]
async fn test_generate_missing_repository_is_invalid_input() {
    let (_temp, files) = workspace(ACTION_YAML);
    let inputs = ConfigInputs {
        repository_url: None,
        ..inputs()
    };

    let err = generate(&files, &inputs, &RunnerEnv::default())
        .await
        .unwrap_err();

    assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    assert!(format!("{err:#}").contains("repository-url"));
}

// ============================================================================
// validate
// ============================================================================

#[tokio::test]
async fn test_validate_reports_counts() {
    let (temp, files) = workspace(ACTION_YAML);
    std::fs::write(
        temp.path().join("examples.yml"),
        "examples:\n  - title: Basic\n    description: Greets the world.\n",
    )
    .unwrap();
    let inputs = ConfigInputs {
        badges: Some(r#"[{"label":"ci","message":"ok","color":"green"}]"#.to_string()),
        examples_path: Some("examples.yml".to_string()),
        exclude_sections: Some("badges,license".to_string()),
        ..inputs()
    };

    let report = validate(&files, &inputs).await.unwrap();

    assert_eq!(report.action_path, "action.yml");
    assert_eq!(report.name, "Greeter");
    assert_eq!(report.runtime, "node20");
    assert_eq!(report.inputs, 2);
    assert_eq!(report.required_inputs, 1);
    assert_eq!(report.outputs, 1);
    assert_eq!(report.badges, 1);
    assert_eq!(report.examples, 1);
    assert!(!report.sections.contains(&SectionName::Badges));
    assert!(!report.sections.contains(&SectionName::License));
    assert!(report.sections.contains(&SectionName::Inputs));
    assert!(!temp.path().join("README.md").exists());
}

#[tokio::test]
async fn test_validate_needs_no_repository() {
    let (_temp, files) = workspace(ACTION_YAML);
    let inputs = ConfigInputs {
        action_path: Some("action.yml".to_string()),
        ..ConfigInputs::default()
    };

    let report = validate(&files, &inputs).await.unwrap();
    assert_eq!(report.sections.len(), SectionName::ALL.len());
}

#[tokio::test]
async fn test_validate_rejects_bad_inputs() {
    let (_temp, files) = workspace(ACTION_YAML);

    let cases = [
        ConfigInputs {
            badges: Some(r#"[{"label":"ci"}]"#.to_string()),
            ..inputs()
        },
        ConfigInputs {
            header_level: Some("0".to_string()),
            ..inputs()
        },
        ConfigInputs {
            exclude_sections: Some("footer".to_string()),
            ..inputs()
        },
    ];

    for case in &cases {
        let err = validate(&files, case).await.unwrap_err();
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT, "{err:#}");
    }
}

#[tokio::test]
async fn test_validate_bad_descriptor_message() {
    let (_temp, files) = workspace("name: Greeter\ndescription: Says hello\n");

    let err = validate(&files, &inputs()).await.unwrap_err();

    assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    assert!(format!("{err:#}").contains("runs must be an object with a using field"));
}
