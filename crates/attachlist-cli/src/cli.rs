use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "attachlist")]
#[command(about = "Resolve how a post's file attachments are displayed")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the resolver config (defaults to $ATTACHLIST_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve renderers for a post's attachments
    Resolve(ResolveArgs),
    /// Inspect resolver configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Attachment JSON document, or `-` for stdin
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
    /// Override the post's file count
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,
    /// Allow SVG files to use the inline image preview
    #[arg(long)]
    pub enable_svgs: bool,
    /// Use the compact display style
    #[arg(long)]
    pub compact: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Validate a config file and list its plugin rules
    Check {
        /// Config file to check (defaults to --config)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
