//! Subcommand runners: read the message, run the tokenizer, print the result to stdout.

use std::io::{self, Write};

use crate::core::config::{Config, ConfigError};
use crate::core::input::{self, InputError};
use crate::core::output::{self, Classification, Format};
use crate::tags;

/// Errors surfaced to the user by the command line.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn message(config: &Config, arg: &str) -> Result<String, RunError> {
    Ok(input::read_message(arg, config.max_input_bytes)?)
}

fn finish(mut out: impl Write) -> Result<(), RunError> {
    out.flush()?;
    Ok(())
}

/// Run the `split` command: print every segment with its kind.
pub fn run_split(config: &Config, arg: &str, format: Format) -> Result<(), RunError> {
    let text = message(config, arg)?;
    let segments = tags::split_mew_text_into_segments(&text);
    log::debug!("split into {} segments", segments.len());
    let mut out = io::stdout().lock();
    output::write_segments(&mut out, &segments, format)?;
    finish(out)
}

/// Run the `classify` command: print the four predicate results.
pub fn run_classify(config: &Config, arg: &str, format: Format) -> Result<(), RunError> {
    let text = message(config, arg)?;
    let classification = Classification::of(&text);
    let mut out = io::stdout().lock();
    output::write_classification(&mut out, &classification, format)?;
    finish(out)
}

/// Run the `anchors` command: print the index paths of hashtags and cashtags.
pub fn run_anchors(config: &Config, arg: &str, format: Format) -> Result<(), RunError> {
    let text = message(config, arg)?;
    let anchors = tags::tag_anchors(&text);
    log::debug!("found {} anchors", anchors.len());
    let mut out = io::stdout().lock();
    output::write_anchors(&mut out, &anchors, format)?;
    finish(out)
}
