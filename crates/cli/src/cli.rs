use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use crossconf_core::OutputFormat;

/// Build the cross-seed configuration, discovering Torznab indexers from Prowlarr.
#[derive(Debug, Parser)]
#[command(name = "crossconf", version)]
pub struct Cli {
    /// Settings file (TOML). Built-in defaults are used when omitted.
    #[arg(short, long, env = "CROSSCONF_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch indexers and write the cross-seed configuration (default)
    Render(RenderArgs),
    /// Print the effective settings with API keys redacted
    Settings,
}

#[derive(Debug, Default, Args)]
pub struct RenderArgs {
    /// Output format: json or module (alias: js)
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
