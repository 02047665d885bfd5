//! Command-line surface

use clap::Parser;
use quill::cli::{Cli, RunContext};
use quill::config::QuillConfig;
use quill::error::ArticleError;

#[test]
fn test_exactly_two_positionals_required() {
    assert!(Cli::try_parse_from(["quill"]).is_err());
    assert!(Cli::try_parse_from(["quill", "Title"]).is_err());
    assert!(Cli::try_parse_from(["quill", "Title", "links", "extra"]).is_err());
    assert!(Cli::try_parse_from(["quill", "Title", "links"]).is_ok());
}

#[test]
fn test_missing_api_key_fails_before_generation() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli::try_parse_from([
        "quill",
        "--output",
        dir.path().join("out").to_str().unwrap(),
        "Title",
        "https://a.com",
    ])
    .unwrap();

    let mut config = QuillConfig::default();
    config.provider.api_key_env = "QUILL_TEST_KEY_THAT_IS_NEVER_SET".to_string();
    let mut context = RunContext::from_config(config);
    context.apply_overrides(&cli);

    let err = context.execute(&cli).unwrap_err();
    assert!(matches!(err, ArticleError::ProviderNotConfigured(_)));
    assert!(!dir.path().join("out.md").exists());
}

#[test]
fn test_show_config_masks_inline_key() {
    let cli = Cli::try_parse_from(["quill", "--show-config", "--model", "gpt-4o"]).unwrap();
    let mut config = QuillConfig::default();
    config.provider.api_key = Some("sk-secret".to_string());
    let mut context = RunContext::from_config(config);
    context.apply_overrides(&cli);

    let shown = context.execute(&cli).unwrap();
    assert!(shown.contains("model = \"gpt-4o\""));
    assert!(!shown.contains("sk-secret"));
}
