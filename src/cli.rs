//! CLI domain: parse, route, and output only.
//! No article logic; the run context hands off to the article pipeline.

mod output;
mod parse;
mod route;

pub use output::{format_summary, map_error, ConsoleProgress};
pub use parse::Cli;
pub use route::RunContext;
