//! CLI route: run context. Loads configuration, wires the provider into the
//! article pipeline, and writes the result.

use crate::article::{ArticleDocument, ArticlePipeline, ArticleRequest, GeneratedArticle, ProgressSink};
use crate::cli::output::{format_summary, ConsoleProgress};
use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, QuillConfig};
use crate::error::ArticleError;
use crate::prompt::PromptSet;
use crate::provider::{Completer, CompletionService, ProviderFactory};
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: the resolved configuration of one run.
pub struct RunContext {
    config: QuillConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ArticleError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self { config })
    }

    pub fn from_config(config: QuillConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuillConfig {
        &self.config
    }

    /// Fold command-line flags over the loaded configuration.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(ref output) = cli.output {
            self.config.generation.output = output.clone();
        }
        if let Some(ref model) = cli.model {
            self.config.provider.model = model.clone();
        }
        if cli.strict_headers {
            self.config.generation.strict_headers = true;
        }
    }

    /// Run the command line: print the configuration, or generate and write an article.
    pub fn execute(&self, cli: &Cli) -> Result<String, ArticleError> {
        if cli.show_config {
            return self.config.to_display_toml();
        }

        let (title, links) = match (cli.title.as_deref(), cli.links.as_deref()) {
            (Some(title), Some(links)) => (title, links),
            _ => {
                return Err(ArticleError::ConfigError(
                    "A title and a link list are required".to_string(),
                ))
            }
        };

        self.config.ensure_valid()?;
        let prompts = PromptSet::from_overrides(&self.config.prompts)?;
        let client = ProviderFactory::from_config(&self.config.provider)?;
        let completer = Completer::new(
            client,
            self.config.provider.system_prompt.clone(),
            self.config.provider.completion_options(),
        );
        info!(
            provider = completer.provider_name(),
            model = completer.model_name(),
            "Provider ready"
        );

        let progress = ConsoleProgress::new(self.config.logging.color);
        let request = ArticleRequest::new(title, links);

        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            ArticleError::ProviderError(format!("Failed to create tokio runtime: {}", e))
        })?;
        let article = if cli.quiet {
            runtime.block_on(self.generate(&completer, &prompts, &request, None))?
        } else {
            runtime.block_on(self.generate(&completer, &prompts, &request, Some(&progress)))?
        };

        let GeneratedArticle { headers, document } = article;
        let path = document.commit()?;
        Ok(format_summary(&headers, &path))
    }

    /// Run the pipeline against any completion service; the document is not written.
    pub async fn generate(
        &self,
        service: &dyn CompletionService,
        prompts: &PromptSet,
        request: &ArticleRequest,
        progress: Option<&dyn ProgressSink>,
    ) -> Result<GeneratedArticle, ArticleError> {
        let document = ArticleDocument::new(&self.config.generation.output);
        let mut pipeline = ArticlePipeline::new(service, prompts)
            .with_strict_headers(self.config.generation.strict_headers);
        if let Some(progress) = progress {
            pipeline = pipeline.with_progress(progress);
        }
        pipeline.run(request, document).await
    }
}
