//! # mewtags
//!
//! Command-line front end for the mewtags tokenizer: split a message into text, tag, and raw
//! URL segments, check the tag predicates, or list hashtag/cashtag index paths.

mod cli;
mod run;

use clap::Parser;
use dotenv::dotenv;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    if let Err(e) = run::run(args) {
        log::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
