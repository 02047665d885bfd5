//! Full article runs against a stub completion service

use super::test_utils::StubService;
use quill::article::{ArticleRequest, RecordingProgress, PipelineEvent, BLOCK_SEPARATOR};
use quill::cli::RunContext;
use quill::config::QuillConfig;
use quill::error::{ArticleError, Stage};
use quill::prompt::{PromptContext, PromptSet};
use tempfile::TempDir;

const TITLE: &str = "Binary Search in Arrays";
const LINKS: &str = "https://a.com/x,https://b.com/y";
const HEADERS: &str =
    "Binary Search in Sorted Arrays, Iterative Binary Search, Recursive Binary Search, Frequently Asked Questions";

fn context_writing_to(dir: &TempDir) -> RunContext {
    let mut config = QuillConfig::default();
    config.generation.output = dir.path().join("input");
    RunContext::from_config(config)
}

#[tokio::test]
async fn test_four_header_article() {
    let dir = TempDir::new().unwrap();
    let context = context_writing_to(&dir);
    let service = StubService::new(HEADERS);
    let prompts = PromptSet::builtin();
    let request = ArticleRequest::new(TITLE, LINKS);

    let article = context
        .generate(&service, &prompts, &request, None)
        .await
        .unwrap();
    assert_eq!(article.headers.len(), 4);

    let sent = service.prompts();
    assert_eq!(sent.len(), 9, "one plan call plus generate and humanize per header");
    assert_eq!(sent[0], prompts.header_plan(TITLE));

    let header_list = article.headers.as_prompt_list();
    let ctx = PromptContext {
        title: TITLE,
        headers: &header_list,
        links: LINKS,
    };
    assert_eq!(sent[1], prompts.introduction(ctx));
    assert_eq!(sent[3], prompts.section(ctx, "Iterative Binary Search"));
    assert_eq!(sent[5], prompts.section(ctx, "Recursive Binary Search"));
    assert_eq!(sent[7], prompts.faq(ctx));

    // Every humanize call wraps the raw block produced just before it
    for call in [2, 4, 6, 8] {
        assert_eq!(sent[call], prompts.humanize(&StubService::marker(call - 1)));
    }

    let path = article.document.commit().unwrap();
    assert_eq!(path, dir.path().join("input.md"));

    let content = std::fs::read_to_string(&path).unwrap();
    let blocks: Vec<&str> = content.trim_end().split(BLOCK_SEPARATOR).collect();
    assert_eq!(blocks, vec!["MARKER-2", "MARKER-4", "MARKER-6", "MARKER-8"]);
}

#[tokio::test]
async fn test_links_reach_generation_prompts_verbatim() {
    let dir = TempDir::new().unwrap();
    let context = context_writing_to(&dir);
    let service = StubService::new(HEADERS);
    let prompts = PromptSet::builtin();

    context
        .generate(&service, &prompts, &ArticleRequest::new(TITLE, LINKS), None)
        .await
        .unwrap();

    let sent = service.prompts();
    for call in [1, 3, 5, 7] {
        assert!(sent[call].contains(LINKS), "call {} is missing the links", call);
    }
    for call in [2, 4, 6, 8] {
        assert!(!sent[call].contains(LINKS), "humanize call {} carries links", call);
    }
}

#[tokio::test]
async fn test_failure_midway_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let context = context_writing_to(&dir);
    // Call 4 is the humanize step of the first body header
    let service = StubService::new(HEADERS).failing_on(4);
    let prompts = PromptSet::builtin();

    let err = context
        .generate(&service, &prompts, &ArticleRequest::new(TITLE, LINKS), None)
        .await
        .unwrap_err();

    match err {
        ArticleError::StageFailed { stage, header, .. } => {
            assert_eq!(stage, Stage::Humanize);
            assert_eq!(header.as_deref(), Some("Iterative Binary Search"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(service.prompts().len(), 5, "no calls after the failure");
    assert!(!dir.path().join("input.md").exists());
}

#[tokio::test]
async fn test_progress_events_follow_stage_order() {
    let dir = TempDir::new().unwrap();
    let context = context_writing_to(&dir);
    let service = StubService::new("Intro, Frequently Asked Questions");
    let prompts = PromptSet::builtin();
    let progress = RecordingProgress::new();

    context
        .generate(
            &service,
            &prompts,
            &ArticleRequest::new(TITLE, LINKS),
            Some(&progress),
        )
        .await
        .unwrap();

    let started: Vec<(Stage, usize)> = progress
        .events()
        .into_iter()
        .filter_map(|event| match event {
            PipelineEvent::StageStarted {
                stage, slot_index, ..
            } => Some((stage, slot_index)),
            _ => None,
        })
        .collect();
    assert_eq!(
        started,
        vec![
            (Stage::Generate, 0),
            (Stage::Humanize, 0),
            (Stage::Generate, 1),
            (Stage::Humanize, 1),
        ]
    );
}

#[tokio::test]
async fn test_strict_headers_from_config() {
    let dir = TempDir::new().unwrap();
    let mut config = QuillConfig::default();
    config.generation.output = dir.path().join("input");
    config.generation.strict_headers = true;
    let context = RunContext::from_config(config);
    let service = StubService::new("Intro, Body, Summary");

    let err = context
        .generate(
            &service,
            &PromptSet::builtin(),
            &ArticleRequest::new(TITLE, LINKS),
            None,
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Summary"));
    assert_eq!(service.prompts().len(), 1);
}
