//! Document Accumulator: collects humanized blocks and writes the article once.

use crate::error::ArticleError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

/// Separator between blocks in the written file.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Article under construction.
///
/// `commit` consumes the document, so it is written at most once.
#[derive(Debug)]
pub struct ArticleDocument {
    path: PathBuf,
    segments: Vec<String>,
}

impl ArticleDocument {
    /// Empty document written to `base`, with `.md` appended unless already present.
    pub fn new(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let path = if base.to_string_lossy().ends_with(".md") {
            base.to_path_buf()
        } else {
            let mut name = OsString::from(base.as_os_str());
            name.push(".md");
            PathBuf::from(name)
        };
        Self {
            path,
            segments: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add one finished block followed by a blank-line separator.
    pub fn append(&mut self, text: &str) {
        self.segments.push(format!("{}\n", text));
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// File content: blocks joined by newlines.
    pub fn render(&self) -> String {
        self.segments.join("\n")
    }

    /// Write the article and return where it was written.
    pub fn commit(self) -> Result<PathBuf, ArticleError> {
        let content = self.render();
        std::fs::write(&self.path, &content).map_err(|source| ArticleError::OutputWrite {
            path: self.path.clone(),
            source,
        })?;
        info!(
            path = %self.path.display(),
            blocks = self.segments.len(),
            bytes = content.len(),
            "Article written"
        );
        Ok(self.path)
    }
}
