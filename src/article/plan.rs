//! Header Planner: asks the model for the article's H2 headers and parses them.

use crate::error::ArticleError;
use crate::prompt::PromptSet;
use crate::provider::CompletionService;
use std::fmt;

/// Header every article is expected to end with.
pub const FAQ_HEADER: &str = "Frequently Asked Questions";

/// Header counts the header-plan prompt asks for.
pub const EXPECTED_HEADER_RANGE: std::ops::RangeInclusive<usize> = 8..=10;

/// Ordered article headers: introduction header first, FAQ header last.
///
/// Always holds at least two headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSequence {
    headers: Vec<String>,
}

impl HeaderSequence {
    pub fn new(headers: Vec<String>) -> Result<Self, ArticleError> {
        if headers.len() < 2 {
            return Err(ArticleError::HeaderPlan(format!(
                "expected at least 2 headers (introduction and FAQ), got {}",
                headers.len()
            )));
        }
        Ok(Self { headers })
    }

    pub fn introduction(&self) -> &str {
        &self.headers[0]
    }

    /// Headers between the introduction and the FAQ.
    pub fn body(&self) -> &[String] {
        &self.headers[1..self.headers.len() - 1]
    }

    pub fn faq(&self) -> &str {
        &self.headers[self.headers.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.headers.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.headers
    }

    /// Header list as substituted into `{headers}`.
    pub fn as_prompt_list(&self) -> String {
        self.headers.join(", ")
    }

    /// Deviations from what the header-plan prompt asked for.
    pub fn check_shape(&self) -> Vec<HeaderWarning> {
        let mut warnings = Vec::new();
        if self.faq() != FAQ_HEADER {
            warnings.push(HeaderWarning::UnexpectedFinalHeader(self.faq().to_string()));
        }
        if !EXPECTED_HEADER_RANGE.contains(&self.len()) {
            warnings.push(HeaderWarning::UnusualCount(self.len()));
        }
        warnings
    }
}

/// Non-fatal header plan observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderWarning {
    UnexpectedFinalHeader(String),
    UnusualCount(usize),
}

impl HeaderWarning {
    /// Whether strict mode rejects the plan for this warning.
    pub fn is_fatal_when_strict(&self) -> bool {
        matches!(self, HeaderWarning::UnexpectedFinalHeader(_))
    }
}

impl fmt::Display for HeaderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderWarning::UnexpectedFinalHeader(header) => write!(
                f,
                "last header is '{}', expected '{}'; it is still written with the FAQ prompt",
                header, FAQ_HEADER
            ),
            HeaderWarning::UnusualCount(count) => write!(
                f,
                "model returned {} headers, asked for {}-{}",
                count,
                EXPECTED_HEADER_RANGE.start(),
                EXPECTED_HEADER_RANGE.end()
            ),
        }
    }
}

/// Split the model's comma-separated header list into headers.
///
/// A pair of quotes wrapping the whole list is removed first. Pieces are then
/// trimmed, one layer of matching quotes is removed, and empty pieces (from a
/// trailing comma, say) are dropped.
pub fn parse_headers(raw: &str) -> Result<HeaderSequence, ArticleError> {
    let headers: Vec<String> = strip_list_quotes(raw.trim())
        .split(',')
        .map(|piece| strip_quotes(piece.trim()).trim().to_string())
        .filter(|header| !header.is_empty())
        .collect();

    HeaderSequence::new(headers).map_err(|_| {
        ArticleError::HeaderPlan(format!(
            "expected a comma-separated list of at least 2 headers, got {:?}",
            truncate(raw, 120)
        ))
    })
}

fn strip_quotes(piece: &str) -> &str {
    for quote in ['\'', '"'] {
        if piece.len() >= 2 && piece.starts_with(quote) && piece.ends_with(quote) {
            return &piece[1..piece.len() - 1];
        }
    }
    piece
}

// `'A, B, C'` is one quoted list; `'A', 'B'` quotes each header and is left alone
fn strip_list_quotes(raw: &str) -> &str {
    for quote in ['\'', '"'] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            let inner = &raw[1..raw.len() - 1];
            let quoted_per_header = inner.split(',').any(|piece| {
                let piece = piece.trim();
                piece.starts_with(quote) || piece.ends_with(quote)
            });
            return if quoted_per_header { raw } else { inner };
        }
    }
    raw
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Sends the header-plan prompt and parses the reply.
pub struct HeaderPlanner<'a> {
    service: &'a dyn CompletionService,
    prompts: &'a PromptSet,
}

impl<'a> HeaderPlanner<'a> {
    pub fn new(service: &'a dyn CompletionService, prompts: &'a PromptSet) -> Self {
        Self { service, prompts }
    }

    pub async fn plan(&self, title: &str) -> Result<HeaderSequence, ArticleError> {
        let prompt = self.prompts.header_plan(title);
        let raw = self.service.complete(&prompt).await?;
        parse_headers(&raw)
    }
}
