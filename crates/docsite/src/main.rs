//! docsite CLI - diagnostic console for the documentation site.
//!
//! Provides commands for:
//! - `check`: Validate and normalize a route path
//! - `resolve`: Apply alias rules to a route path
//! - `config`: Show the resolved configuration or renderer options
//! - `visit`: Run the lifecycle hooks for one navigation

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ConfigCommandArgs, ResolveArgs, VisitArgs};
use output::Output;

/// docsite - documentation site diagnostics.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    /// Enable verbose output (hook diagnostics at info level).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a route path and suggest encodings.
    Check(CheckArgs),
    /// Rewrite a route path with the configured alias rules.
    Resolve(ResolveArgs),
    /// Show the resolved configuration.
    Config(ConfigCommandArgs),
    /// Run the lifecycle hooks for one navigation.
    Visit(VisitArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Config(args) => args.execute(),
        Commands::Visit(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
