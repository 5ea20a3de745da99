//! Application run: logger init and subcommand dispatch.

use clap::CommandFactory;

use crate::cli::{self, Args, Commands, MessageArgs};
use mewtags::core::app;
use mewtags::core::cli::{RunError, run_anchors, run_classify, run_split};
use mewtags::core::config::{self, Config};
use mewtags::core::output::Format;

type Runner = fn(&Config, &str, Format) -> Result<(), RunError>;

/// Initialize env_logger at the level chosen by -v/-q; RUST_LOG still takes precedence.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Dispatch the parsed command.
pub fn run(args: Args) -> Result<(), RunError> {
    match args.command {
        Commands::Split(m) => with_config(&m, run_split),
        Commands::Classify(m) => with_config(&m, run_classify),
        Commands::Anchors(m) => with_config(&m, run_anchors),
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, app::NAME, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load configuration, then run a tokenizer command on the message argument.
fn with_config(message: &MessageArgs, runner: Runner) -> Result<(), RunError> {
    let config = config::load()?;
    log::info!("{} {}", app::NAME, app::VERSION);
    runner(&config, &message.message, message.format_or(config.output))
}
