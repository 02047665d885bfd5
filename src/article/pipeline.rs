//! Article pipeline: header plan, then generate and humanize each slot in order.

use crate::article::document::ArticleDocument;
use crate::article::plan::{HeaderPlanner, HeaderSequence};
use crate::article::progress::{NullProgress, PipelineEvent, ProgressSink};
use crate::article::section::{Humanizer, SectionGenerator, SectionSlot};
use crate::error::{ArticleError, Stage};
use crate::prompt::{PromptContext, PromptSet};
use crate::provider::CompletionService;
use tracing::{info, warn};

/// Inputs of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    pub title: String,
    /// Comma-separated URLs the model may cite
    pub links: String,
}

impl ArticleRequest {
    pub fn new(title: impl Into<String>, links: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            links: links.into(),
        }
    }
}

/// Finished but not yet written article.
#[derive(Debug)]
pub struct GeneratedArticle {
    pub headers: HeaderSequence,
    pub document: ArticleDocument,
}

/// Runs the stages strictly in sequence; the first failure aborts the run.
pub struct ArticlePipeline<'a> {
    service: &'a dyn CompletionService,
    prompts: &'a PromptSet,
    progress: &'a dyn ProgressSink,
    strict_headers: bool,
}

impl<'a> ArticlePipeline<'a> {
    pub fn new(service: &'a dyn CompletionService, prompts: &'a PromptSet) -> Self {
        Self {
            service,
            prompts,
            progress: &NullProgress,
            strict_headers: false,
        }
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// Reject header plans whose last header is not the FAQ header.
    pub fn with_strict_headers(mut self, strict: bool) -> Self {
        self.strict_headers = strict;
        self
    }

    pub async fn run(
        &self,
        request: &ArticleRequest,
        mut document: ArticleDocument,
    ) -> Result<GeneratedArticle, ArticleError> {
        self.emit(PipelineEvent::PlanningHeaders {
            title: request.title.clone(),
        });
        let headers = HeaderPlanner::new(self.service, self.prompts)
            .plan(&request.title)
            .await
            .map_err(|e| e.at_stage(Stage::HeaderPlan, None))?;
        self.emit(PipelineEvent::HeadersPlanned {
            headers: headers.as_slice().to_vec(),
        });
        self.check_headers(&headers)?;

        let header_list = headers.as_prompt_list();
        let context = PromptContext {
            title: &request.title,
            headers: &header_list,
            links: &request.links,
        };
        let generator = SectionGenerator::new(self.service, self.prompts, context);
        let humanizer = Humanizer::new(self.service, self.prompts);

        for (slot_index, slot) in SectionSlot::for_sequence(&headers).into_iter().enumerate() {
            let header = slot.header();

            self.emit_started(Stage::Generate, slot_index, header);
            let raw = generator
                .generate(slot)
                .await
                .map_err(|e| e.at_stage(Stage::Generate, Some(header)))?;
            self.emit_completed(Stage::Generate, slot_index, header, &raw);

            self.emit_started(Stage::Humanize, slot_index, header);
            let humanized = humanizer
                .humanize(&raw)
                .await
                .map_err(|e| e.at_stage(Stage::Humanize, Some(header)))?;
            self.emit_completed(Stage::Humanize, slot_index, header, &humanized);

            document.append(&humanized);
        }

        info!(
            headers = headers.len(),
            blocks = document.len(),
            "Article generation complete"
        );
        Ok(GeneratedArticle { headers, document })
    }

    fn check_headers(&self, headers: &HeaderSequence) -> Result<(), ArticleError> {
        for warning in headers.check_shape() {
            if self.strict_headers && warning.is_fatal_when_strict() {
                return Err(ArticleError::HeaderPlan(warning.to_string())
                    .at_stage(Stage::HeaderPlan, None));
            }
            warn!(warning = %warning, "Header plan differs from the requested shape");
            self.emit(PipelineEvent::HeaderWarning {
                message: warning.to_string(),
            });
        }
        Ok(())
    }

    fn emit_started(&self, stage: Stage, slot_index: usize, header: &str) {
        self.emit(PipelineEvent::StageStarted {
            stage,
            slot_index,
            header: header.to_string(),
        });
    }

    fn emit_completed(&self, stage: Stage, slot_index: usize, header: &str, text: &str) {
        self.emit(PipelineEvent::StageCompleted {
            stage,
            slot_index,
            header: header.to_string(),
            chars: text.chars().count(),
        });
    }

    fn emit(&self, event: PipelineEvent) {
        info!(event = ?event, "pipeline");
        self.progress.on_event(&event);
    }
}
