//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use clap_complete::Shell;

use mewtags::core::output::Format;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  mewtags split \"hi @bob check #news\"        Print segments with their kind
  mewtags split --format json -              Read the message from stdin, print JSON
  mewtags classify \"see ^report\"             Show which tag predicates match
  mewtags anchors \"#news about $AAPL\"        Print hashtag/cashtag index paths
  mewtags completions bash                   Generate bash completions

ENVIRONMENT:
  MEWTAGS_MAX_INPUT_BYTES   Largest accepted message (default 65536)
  MEWTAGS_OUTPUT            Default output format: text or json
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Find cashtags, hashtags, mentions, link tags, and raw URLs in a message",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Message and output options shared by the tokenizer commands.
#[derive(ClapArgs)]
pub struct MessageArgs {
    /// Message text, or '-' to read it from stdin
    pub message: String,

    /// Output format (overrides MEWTAGS_OUTPUT)
    #[arg(short = 'f', long, value_parser = ["text", "json"])]
    pub format: Option<String>,
}

impl MessageArgs {
    /// Format from the flag, falling back to the configured default.
    pub fn format_or(&self, default: Format) -> Format {
        self.format
            .as_deref()
            .and_then(Format::parse)
            .unwrap_or(default)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a message into text, tag, and raw URL segments
    Split(MessageArgs),
    /// Report which tag predicates match a message
    Classify(MessageArgs),
    /// List the hashtag and cashtag index paths of a message
    Anchors(MessageArgs),
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
