//! Section Generator and Humanizer.

use crate::article::plan::HeaderSequence;
use crate::error::ArticleError;
use crate::prompt::{PromptContext, PromptKind, PromptSet};
use crate::provider::CompletionService;

/// One header position in the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSlot<'a> {
    Introduction(&'a str),
    Body(&'a str),
    Faq(&'a str),
}

impl<'a> SectionSlot<'a> {
    /// Slots in article order: introduction, every body header, FAQ.
    pub fn for_sequence(headers: &'a HeaderSequence) -> Vec<SectionSlot<'a>> {
        let mut slots = Vec::with_capacity(headers.len());
        slots.push(SectionSlot::Introduction(headers.introduction()));
        slots.extend(headers.body().iter().map(|h| SectionSlot::Body(h.as_str())));
        slots.push(SectionSlot::Faq(headers.faq()));
        slots
    }

    pub fn header(&self) -> &'a str {
        match *self {
            SectionSlot::Introduction(header)
            | SectionSlot::Body(header)
            | SectionSlot::Faq(header) => header,
        }
    }

    /// Template used to generate this slot's raw content.
    pub fn prompt_kind(&self) -> PromptKind {
        match self {
            SectionSlot::Introduction(_) => PromptKind::Introduction,
            SectionSlot::Body(_) => PromptKind::SectionWriter,
            SectionSlot::Faq(_) => PromptKind::Faq,
        }
    }
}

/// Produces raw content for a slot; one completion call per slot.
pub struct SectionGenerator<'a> {
    service: &'a dyn CompletionService,
    prompts: &'a PromptSet,
    context: PromptContext<'a>,
}

impl<'a> SectionGenerator<'a> {
    pub fn new(
        service: &'a dyn CompletionService,
        prompts: &'a PromptSet,
        context: PromptContext<'a>,
    ) -> Self {
        Self {
            service,
            prompts,
            context,
        }
    }

    pub fn prompt_for(&self, slot: SectionSlot<'_>) -> String {
        match slot {
            SectionSlot::Introduction(_) => self.prompts.introduction(self.context),
            SectionSlot::Body(header) => self.prompts.section(self.context, header),
            // The FAQ prompt names its own header; the model's wording is not substituted
            SectionSlot::Faq(_) => self.prompts.faq(self.context),
        }
    }

    pub async fn generate(&self, slot: SectionSlot<'_>) -> Result<String, ArticleError> {
        let prompt = self.prompt_for(slot);
        self.service.complete(&prompt).await
    }
}

/// Rewrites a raw content block in the humanizer style.
pub struct Humanizer<'a> {
    service: &'a dyn CompletionService,
    prompts: &'a PromptSet,
}

impl<'a> Humanizer<'a> {
    pub fn new(service: &'a dyn CompletionService, prompts: &'a PromptSet) -> Self {
        Self { service, prompts }
    }

    pub async fn humanize(&self, raw: &str) -> Result<String, ArticleError> {
        let prompt = self.prompts.humanize(raw);
        self.service.complete(&prompt).await
    }
}
