//! Pipeline progress events.

use crate::error::Stage;
use std::sync::Mutex;

/// Observable steps of an article run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    PlanningHeaders {
        title: String,
    },
    HeadersPlanned {
        headers: Vec<String>,
    },
    HeaderWarning {
        message: String,
    },
    StageStarted {
        stage: Stage,
        slot_index: usize,
        header: String,
    },
    StageCompleted {
        stage: Stage,
        slot_index: usize,
        header: String,
        chars: usize,
    },
}

/// Receives pipeline events as they happen.
pub trait ProgressSink: Send + Sync {
    fn on_event(&self, event: &PipelineEvent);
}

/// Discards every event.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_event(&self, _event: &PipelineEvent) {}
}

/// Keeps every event in memory.
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<PipelineEvent>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn on_event(&self, event: &PipelineEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
    }
}
