//! Integration tests for the Quill tutorial generator

mod cli_args;
mod config_loading;
mod end_to_end;
mod openai_client;
mod test_utils;
