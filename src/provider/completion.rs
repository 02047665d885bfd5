//! Prompt-in, text-out completion capability.

use crate::error::ArticleError;
use crate::provider::{ChatMessage, CompletionOptions, ModelProviderClient};
use async_trait::async_trait;
use tracing::debug;

/// `complete(prompt) -> text | failure`. Every pipeline stage calls through this.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ArticleError>;
}

/// Wraps a provider client with the system prompt and generation options of a run.
///
/// Each call is independent: no conversation history is carried between prompts.
pub struct Completer {
    client: Box<dyn ModelProviderClient>,
    system_prompt: String,
    options: CompletionOptions,
}

impl Completer {
    pub fn new(
        client: Box<dyn ModelProviderClient>,
        system_prompt: impl Into<String>,
        options: CompletionOptions,
    ) -> Self {
        Self {
            client,
            system_prompt: system_prompt.into(),
            options,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }
}

#[async_trait]
impl CompletionService for Completer {
    async fn complete(&self, prompt: &str) -> Result<String, ArticleError> {
        let messages = vec![
            ChatMessage::system(self.system_prompt.clone()),
            ChatMessage::user(prompt),
        ];
        let response = self.client.complete(messages, self.options.clone()).await?;

        debug!(
            provider = self.client.provider_name(),
            model = %response.model,
            prompt_chars = prompt.chars().count(),
            response_chars = response.content.chars().count(),
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            "Completion received"
        );

        if response.content.trim().is_empty() {
            return Err(ArticleError::ProviderError(format!(
                "Model {} returned an empty completion",
                response.model
            )));
        }
        Ok(response.content)
    }
}
