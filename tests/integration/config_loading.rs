//! Layered configuration and prompt overrides

use super::test_utils::with_isolated_config_home;
use quill::config::{ConfigLoader, ProviderType};
use quill::error::ArticleError;
use quill::prompt::{PromptKind, PromptSet};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_workspace_file_with_prompt_override() {
    let dir = TempDir::new().unwrap();
    let humanizer = dir.path().join("humanizer.txt");
    std::fs::write(&humanizer, "Rewrite plainly:\n{content}").unwrap();
    std::fs::write(
        dir.path().join("quill.toml"),
        format!(
            "[provider]\nprovider_type = \"local\"\nendpoint = \"http://localhost:8080/v1\"\n\n[prompts]\nhumanizer_file = {:?}\n",
            humanizer.display().to_string()
        ),
    )
    .unwrap();

    let config = with_isolated_config_home(&dir, || ConfigLoader::load(dir.path()).unwrap());
    assert_eq!(config.provider.provider_type, ProviderType::Local);
    assert!(config.validate().is_ok());

    let prompts = PromptSet::from_overrides(&config.prompts).unwrap();
    assert_eq!(prompts.template(PromptKind::Humanizer), "Rewrite plainly:\n{content}");
    assert_eq!(prompts.humanize("draft"), "Rewrite plainly:\ndraft");
    assert_eq!(
        prompts.template(PromptKind::HeaderPlan),
        PromptSet::builtin().template(PromptKind::HeaderPlan)
    );
}

#[test]
fn test_override_missing_required_placeholder_is_rejected() {
    let dir = TempDir::new().unwrap();
    let section = dir.path().join("section.txt");
    std::fs::write(&section, "Write about {title}").unwrap();
    std::fs::write(
        dir.path().join("quill.toml"),
        format!("[prompts]\nsection_file = {:?}\n", section.display().to_string()),
    )
    .unwrap();

    let config = with_isolated_config_home(&dir, || ConfigLoader::load(dir.path()).unwrap());
    let err = PromptSet::from_overrides(&config.prompts).unwrap_err();
    assert!(matches!(err, ArticleError::InvalidTemplate { .. }));
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quill.toml"), "[provider\nmodel = ").unwrap();
    let err = with_isolated_config_home(&dir, || ConfigLoader::load(dir.path()).unwrap_err());
    assert!(matches!(err, ArticleError::ConfigError(_)));
}

#[test]
fn test_explicit_file_skips_workspace_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("quill.toml"),
        "[generation]\noutput = \"from-workspace\"\n",
    )
    .unwrap();
    let explicit = dir.path().join("explicit.toml");
    std::fs::write(&explicit, "[provider]\nmodel = \"gpt-4o\"\n").unwrap();

    let config = with_isolated_config_home(&dir, || ConfigLoader::load_from_file(&explicit).unwrap());
    assert_eq!(config.provider.model, "gpt-4o");
    assert_eq!(config.generation.output, PathBuf::from("input"));
}
