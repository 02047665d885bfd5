//! Merge rules: built-in defaults applied before any file or env source.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("provider.provider_type", "openai")?
        .set_default("provider.model", crate::provider::profile::DEFAULT_MODEL)?
        .set_default("generation.output", "input")?
        .set_default("generation.strict_headers", false)
}
