//! Shared test utilities for integration tests

use async_trait::async_trait;
use quill::error::ArticleError;
use quill::provider::CompletionService;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that change process environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with XDG_CONFIG_HOME pointed into `dir`, restoring it afterwards.
pub fn with_isolated_config_home<F, R>(dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    let config_home = dir.path().join("xdg");
    std::fs::create_dir_all(&config_home).unwrap();
    std::env::set_var("XDG_CONFIG_HOME", &config_home);

    let result = f();

    match original {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }
    result
}

/// Answers the first prompt with a fixed header list and every later prompt
/// with a numbered marker, recording each prompt it receives.
pub struct StubService {
    header_reply: String,
    prompts: Mutex<Vec<String>>,
    fail_on_call: Option<usize>,
}

impl StubService {
    pub fn new(header_reply: &str) -> Self {
        Self {
            header_reply: header_reply.to_string(),
            prompts: Mutex::new(Vec::new()),
            fail_on_call: None,
        }
    }

    /// Fail the call with this zero-based index instead of answering it.
    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn marker(call: usize) -> String {
        format!("MARKER-{}", call)
    }
}

#[async_trait]
impl CompletionService for StubService {
    async fn complete(&self, prompt: &str) -> Result<String, ArticleError> {
        let mut prompts = self.prompts.lock().unwrap();
        let call = prompts.len();
        prompts.push(prompt.to_string());
        if self.fail_on_call == Some(call) {
            return Err(ArticleError::ProviderRequestFailed("stub failure".to_string()));
        }
        if call == 0 {
            Ok(self.header_reply.clone())
        } else {
            Ok(Self::marker(call))
        }
    }
}
