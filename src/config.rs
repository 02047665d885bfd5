//! Configuration System
//!
//! Layered configuration built with the `config` crate. Sources, lowest to
//! highest precedence: built-in defaults, the global file, the workspace
//! `quill.toml` (or an explicit `--config` file in place of both files), then
//! `QUILL__SECTION__KEY` environment variables. CLI flags are applied on top
//! by the caller.

use crate::error::ArticleError;
use crate::logging::LoggingConfig;
use crate::prompt::PromptOverrides;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub use crate::provider::{ProviderConfig, ProviderType};

mod merge;
pub mod sources;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuillConfig {
    /// Completion provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Article generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Prompt template overrides
    #[serde(default)]
    pub prompts: PromptOverrides,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Article generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Output file base name; `.md` is appended when missing
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Fail the run when the last planned header is not "Frequently Asked Questions"
    #[serde(default)]
    pub strict_headers: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("input")
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            strict_headers: false,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Provider: {0}")]
    Provider(String),
    #[error("Generation: {0}")]
    Generation(String),
    #[error("Logging: {0}")]
    Logging(String),
}

impl QuillConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.provider.validate() {
            errors.push(ValidationError::Provider(e));
        }

        if self.generation.output.as_os_str().is_empty() {
            errors.push(ValidationError::Generation(
                "Output name cannot be empty".to_string(),
            ));
        }

        if self.logging.format != "text" && self.logging.format != "json" {
            errors.push(ValidationError::Logging(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                self.logging.format
            )));
        }
        if !matches!(self.logging.output.as_str(), "stdout" | "stderr" | "file") {
            errors.push(ValidationError::Logging(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all problems into one configuration error.
    pub fn ensure_valid(&self) -> Result<(), ArticleError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ArticleError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// TOML rendering with secrets masked.
    pub fn to_display_toml(&self) -> Result<String, ArticleError> {
        let mut shown = self.clone();
        shown.provider = self.provider.redacted();
        toml::to_string_pretty(&shown)
            .map_err(|e| ArticleError::ConfigError(format!("Failed to render config: {}", e)))
    }
}

/// Loads [`QuillConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, global file, `<workspace_root>/quill.toml`, then environment.
    pub fn load(workspace_root: &Path) -> Result<QuillConfig, ArticleError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder);
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root);
        let builder = sources::environment::add_to_builder(builder);
        let config: QuillConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Defaults, the given file (which must exist), then environment.
    pub fn load_from_file(path: &Path) -> Result<QuillConfig, ArticleError> {
        if !path.exists() {
            return Err(ArticleError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge::builder_with_defaults()?
            .add_source(config::File::from(path).required(true));
        let builder = sources::environment::add_to_builder(builder);
        let config: QuillConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }
}
