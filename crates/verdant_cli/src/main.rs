//! Verdant CLI
//!
//! Command-line front end for the Verdant stylesheet generator:
//! - `verdant build` - one full generation pass
//! - `verdant watch` - rebuild on every change to content, config or input
//! - `verdant init` - write a starter `verdant.toml`
//! - `verdant resolve` - print resolved theme tokens

mod build;
mod project;
mod resolve;
mod watch;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::build::BuildArgs;

/// Green-themed component classes and utilities, pruned to what you use
#[derive(Parser, Debug)]
#[command(name = "verdant")]
#[command(about = "Generate a green-themed stylesheet from verdant.toml")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the stylesheet once
    Build(BuildArgs),

    /// Build, then rebuild whenever a watched file changes
    Watch {
        #[command(flatten)]
        build: BuildArgs,

        /// Use a polling watcher (network drives, containers)
        #[arg(long)]
        poll: bool,
    },

    /// Create a verdant.toml from a preset
    Init {
        /// Directory to create the configuration in
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Preset to start from
        #[arg(long, default_value = "green")]
        preset: String,
    },

    /// Print the resolved value of theme tokens
    Resolve {
        /// Dotted token paths, e.g. colors.primary.600
        #[arg(required = true)]
        paths: Vec<String>,

        /// Configuration file (defaults to ./verdant.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Resolve against a built-in preset instead of a configuration file
        #[arg(long, conflicts_with = "config")]
        preset: Option<String>,

        /// Print a JSON object instead of `path: value` lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build(args) => build::run(&args).map(|_| ()),
        Commands::Watch { build, poll } => watch::run(&build, poll),
        Commands::Init { dir, preset } => project::init(&dir, &preset),
        Commands::Resolve {
            paths,
            config,
            preset,
            json,
        } => resolve::run(&paths, config.as_deref(), preset.as_deref(), json),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
