//! CLI parse: clap types for Quill. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Quill - Technical tutorial generator
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "Generate a long-form technical tutorial from a title and related links")]
pub struct Cli {
    /// Article title, e.g. "Binary Search in Arrays"
    #[arg(required_unless_present = "show_config")]
    pub title: Option<String>,

    /// Comma-separated links the article may cite
    #[arg(required_unless_present = "show_config")]
    pub links: Option<String>,

    /// Output file base name (".md" is appended when missing)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Directory searched for quill.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Completion model to use
    #[arg(long)]
    pub model: Option<String>,

    /// Fail when the last planned header is not "Frequently Asked Questions"
    #[arg(long)]
    pub strict_headers: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable logging and progress output
    #[arg(long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
