//! OpenAI-compatible client against a mock HTTP server

use quill::article::{ArticleRequest, BLOCK_SEPARATOR};
use quill::cli::RunContext;
use quill::config::QuillConfig;
use quill::error::ArticleError;
use quill::prompt::PromptSet;
use quill::provider::{
    ChatMessage, Completer, CompletionOptions, CompletionService, ModelProvider, ProviderConfig,
    ProviderFactory, ProviderType,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn provider_for(server: &MockServer) -> ModelProvider {
    ModelProvider {
        provider_type: ProviderType::OpenAI,
        model: "gpt-4o-mini".to_string(),
        endpoint: server.uri(),
        api_key: Some("test-key".to_string()),
        request_timeout_secs: 5,
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15 }
    })
}

#[tokio::test]
async fn test_request_shape_and_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 10000,
            "stream": false,
            "messages": [
                { "role": "system", "content": "You are a helpful assistant." },
                { "role": "user", "content": "Say hi" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("hi")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ProviderFactory::create_client(&provider_for(&server)).unwrap();
    let completer = Completer::new(
        client,
        "You are a helpful assistant.",
        ProviderConfig::default().completion_options(),
    );

    assert_eq!(completer.complete("Say hi").await.unwrap(), "hi");
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = ProviderFactory::create_client(&provider_for(&server)).unwrap();
    let err = client
        .complete(vec![ChatMessage::user("x")], CompletionOptions::default())
        .await
        .unwrap_err();
    match err {
        ArticleError::ProviderAuthFailed(message) => assert!(message.contains("invalid api key")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_rate_limit_maps_to_rate_limit_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let client = ProviderFactory::create_client(&provider_for(&server)).unwrap();
    let err = client
        .complete(vec![ChatMessage::user("x")], CompletionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ArticleError::ProviderRateLimit(_)));
}

#[tokio::test]
async fn test_null_content_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "gpt-4o-mini",
            "choices": [{
                "message": { "role": "assistant", "content": null },
                "finish_reason": "content_filter"
            }]
        })))
        .mount(&server)
        .await;

    let client = ProviderFactory::create_client(&provider_for(&server)).unwrap();
    let completer = Completer::new(client, "sys", CompletionOptions::default());
    let err = completer.complete("x").await.unwrap_err();
    assert!(matches!(err, ArticleError::ProviderError(_)));
}

#[tokio::test]
async fn test_local_provider_sends_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .mount(&server)
        .await;

    let config = ProviderConfig {
        provider_type: ProviderType::Local,
        endpoint: Some(format!("{}/v1/", server.uri())),
        api_key_env: "QUILL_TEST_UNSET_KEY".to_string(),
        ..ProviderConfig::default()
    };
    let client = ProviderFactory::from_config(&config).unwrap();
    assert_eq!(client.provider_name(), "local");
    client
        .complete(vec![ChatMessage::user("x")], CompletionOptions::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

/// First request gets the header plan, later ones a numbered block.
struct ArticleResponder {
    calls: AtomicUsize,
}

impl Respond for ArticleResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let content = if call == 0 {
            "Intro, Details, Frequently Asked Questions".to_string()
        } else {
            format!("block {}", call)
        };
        ResponseTemplate::new(200).set_body_json(completion_body(&content))
    }
}

#[tokio::test]
async fn test_pipeline_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ArticleResponder {
            calls: AtomicUsize::new(0),
        })
        .expect(7)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = QuillConfig::default();
    config.generation.output = dir.path().join("article");
    let context = RunContext::from_config(config);

    let client = ProviderFactory::create_client(&provider_for(&server)).unwrap();
    let completer = Completer::new(client, "sys", CompletionOptions::default());
    let article = context
        .generate(
            &completer,
            &PromptSet::builtin(),
            &ArticleRequest::new("Heaps", "https://a.com/heap"),
            None,
        )
        .await
        .unwrap();

    let content = std::fs::read_to_string(article.document.commit().unwrap()).unwrap();
    let blocks: Vec<&str> = content.trim_end().split(BLOCK_SEPARATOR).collect();
    assert_eq!(blocks, vec!["block 2", "block 4", "block 6"]);
}
