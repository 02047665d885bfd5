//! Error types for the Quill article generator.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    HeaderPlan,
    Generate,
    Humanize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::HeaderPlan => "header plan",
            Stage::Generate => "generate",
            Stage::Humanize => "humanize",
        };
        f.write_str(name)
    }
}

/// Errors raised by the library.
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid prompt template '{template}': {reason}")]
    InvalidTemplate {
        template: &'static str,
        reason: String,
    },

    #[error("Header plan could not be parsed: {0}")]
    HeaderPlan(String),

    #[error("{stage} stage failed{}: {source}", header_suffix(.header))]
    StageFailed {
        stage: Stage,
        header: Option<String>,
        #[source]
        source: Box<ArticleError>,
    },

    #[error("Failed to write article to {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn header_suffix(header: &Option<String>) -> String {
    match header {
        Some(header) => format!(" for header '{}'", header),
        None => String::new(),
    }
}

impl ArticleError {
    /// Wrap an error with the stage and header it was raised for.
    pub fn at_stage(self, stage: Stage, header: Option<&str>) -> Self {
        ArticleError::StageFailed {
            stage,
            header: header.map(str::to_string),
            source: Box::new(self),
        }
    }
}

impl From<config::ConfigError> for ArticleError {
    fn from(err: config::ConfigError) -> Self {
        ArticleError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_failure_names_stage_and_header() {
        let err = ArticleError::ProviderRateLimit("slow down".to_string())
            .at_stage(Stage::Humanize, Some("Approach Using Recursion"));
        let message = err.to_string();
        assert!(message.starts_with("humanize stage failed for header 'Approach Using Recursion'"));
        assert!(message.contains("slow down"));
    }

    #[test]
    fn test_stage_failure_without_header() {
        let err = ArticleError::HeaderPlan("no commas".to_string()).at_stage(Stage::HeaderPlan, None);
        assert_eq!(
            err.to_string(),
            "header plan stage failed: Header plan could not be parsed: no commas"
        );
    }
}
