//! Configuration from the environment (a `.env` file in the working directory is loaded first).

use std::env;

use crate::core::output::Format;

/// Default upper bound on the size of a message read by the CLI.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;

const MAX_INPUT_BYTES_VAR: &str = "MEWTAGS_MAX_INPUT_BYTES";
const OUTPUT_VAR: &str = "MEWTAGS_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_input_bytes: usize,
    pub output: Format,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            output: Format::Text,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be 'text' or 'json', got '{value}'")]
    InvalidFormat { var: &'static str, value: String },
}

/// Load configuration from environment variables. Unset or empty variables keep their defaults.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|key| env::var(key).ok())
}

/// Build a config from an arbitrary variable lookup.
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(value) = get(MAX_INPUT_BYTES_VAR) {
        config.max_input_bytes = value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ConfigError::InvalidNumber {
                var: MAX_INPUT_BYTES_VAR,
                value: value.clone(),
            })?;
    }
    if let Some(value) = get(OUTPUT_VAR) {
        config.output = Format::parse(&value).ok_or_else(|| ConfigError::InvalidFormat {
            var: OUTPUT_VAR,
            value: value.clone(),
        })?;
    }

    log::debug!(
        "config: max_input_bytes={}, output={:?}",
        config.max_input_bytes,
        config.output
    );
    Ok(config)
}
