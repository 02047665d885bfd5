//! Template override files from the `[prompts]` configuration table.

use super::PromptKind;
use crate::error::ArticleError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Optional replacement template files, one per prompt kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_plan_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humanizer_file: Option<PathBuf>,
}

impl PromptOverrides {
    pub fn path_for(&self, kind: PromptKind) -> Option<&PathBuf> {
        match kind {
            PromptKind::HeaderPlan => self.header_plan_file.as_ref(),
            PromptKind::Introduction => self.introduction_file.as_ref(),
            PromptKind::SectionWriter => self.section_file.as_ref(),
            PromptKind::Faq => self.faq_file.as_ref(),
            PromptKind::Humanizer => self.humanizer_file.as_ref(),
        }
    }

    /// Read the override for `kind`, if one is configured.
    pub fn load(&self, kind: PromptKind) -> Result<Option<String>, ArticleError> {
        let Some(path) = self.path_for(kind) else {
            return Ok(None);
        };
        let template = std::fs::read_to_string(path).map_err(|e| ArticleError::InvalidTemplate {
            template: kind.name(),
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        info!(template = kind.name(), path = %path.display(), "Loaded prompt override");
        Ok(Some(template))
    }
}
