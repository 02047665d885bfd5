//! CLI output: error mapping, console progress and the run summary.

use crate::article::{PipelineEvent, ProgressSink, SectionSlot};
use crate::article::HeaderSequence;
use crate::error::{ArticleError, Stage};
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ArticleError) -> String {
    let hint = match root_cause(e) {
        ArticleError::ProviderNotConfigured(_) | ArticleError::ProviderAuthFailed(_) => {
            Some("check provider.api_key or the OPENAI_API_KEY environment variable")
        }
        ArticleError::ProviderModelNotFound(_) => Some("check provider.model or pass --model"),
        _ => None,
    };
    match hint {
        Some(hint) => format!("Error: {}\n  hint: {}", e, hint),
        None => format!("Error: {}", e),
    }
}

fn root_cause(e: &ArticleError) -> &ArticleError {
    match e {
        ArticleError::StageFailed { source, .. } => root_cause(source),
        other => other,
    }
}

/// Writes one line per pipeline step to stderr.
pub struct ConsoleProgress {
    color: bool,
}

impl ConsoleProgress {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn line(&self, marker: &str, text: String) {
        if self.color {
            eprintln!("{} {}", marker.cyan().bold(), text);
        } else {
            eprintln!("{} {}", marker, text);
        }
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_event(&self, event: &PipelineEvent) {
        match event {
            PipelineEvent::PlanningHeaders { title } => {
                self.line("==>", format!("Planning headers for \"{}\"", title));
            }
            PipelineEvent::HeadersPlanned { headers } => {
                self.line("==>", format!("{} headers planned", headers.len()));
            }
            PipelineEvent::HeaderWarning { message } => {
                if self.color {
                    eprintln!("{} {}", "warning:".yellow().bold(), message);
                } else {
                    eprintln!("warning: {}", message);
                }
            }
            PipelineEvent::StageStarted {
                stage,
                slot_index,
                header,
            } => {
                let verb = match stage {
                    Stage::Generate => "Writing",
                    Stage::Humanize => "Humanizing",
                    Stage::HeaderPlan => "Planning",
                };
                self.line(" ->", format!("[{}] {} {}", slot_index + 1, verb, header));
            }
            PipelineEvent::StageCompleted { .. } => {}
        }
    }
}

/// Table of planned headers, the template used for each, and the output path.
pub fn format_summary(headers: &HeaderSequence, path: &Path) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["#", "Header", "Template"]);
    for (index, slot) in SectionSlot::for_sequence(headers).iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            slot.header().to_string(),
            slot.prompt_kind().name().to_string(),
        ]);
    }
    format!("{}\n\nWrote {}", table, path.display())
}
