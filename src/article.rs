//! Article generation: header planning, per-header generation and
//! humanization, and accumulation into the output document.

pub mod document;
pub mod pipeline;
pub mod plan;
pub mod progress;
pub mod section;

pub use document::{ArticleDocument, BLOCK_SEPARATOR};
pub use pipeline::{ArticlePipeline, ArticleRequest, GeneratedArticle};
pub use plan::{parse_headers, HeaderPlanner, HeaderSequence, HeaderWarning, FAQ_HEADER};
pub use progress::{NullProgress, PipelineEvent, ProgressSink, RecordingProgress};
pub use section::{Humanizer, SectionGenerator, SectionSlot};
