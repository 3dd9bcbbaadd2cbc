//! natpass: memorable passwords from word, digit and symbol fields.
//!
//! The binary parses arguments, sets up logging and hands the parsed
//! command to `commands::dispatch`. Field logic lives in the library;
//! terminal and clipboard handling live in `ui.rs`.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod ui;

/// Log to stderr so stdout only ever carries passwords.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "natpass=warn",
        1 => "natpass=info",
        _ => "natpass=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    commands::dispatch(cli)
}
