//! attachlist CLI - Inspect how a post's attachments would be displayed
//!
//! Reads attachment metadata as JSON, applies plugin rules from a config
//! file and prints the resolved layout.

mod cli;
mod commands;
mod error;


use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::common::resolve_config_path;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::resolve::run_resolve;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "attachlist=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config);

    match cli.command {
        Commands::Resolve(args) => run_resolve(&args, config_path.as_deref()),
        Commands::Config { command } => run_config(command, config_path.as_deref()),
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref()),
    }
}
