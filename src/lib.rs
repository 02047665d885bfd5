//! Quill: Technical Tutorial Generator
//!
//! Writes a long-form tutorial from a title and a list of related links by
//! asking a completion model for a header plan, generating each section,
//! rewriting it in a plainer voice, and saving the result as Markdown.

pub mod article;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod provider;
