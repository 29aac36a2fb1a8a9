mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    inspect, new, normalize, validate, InspectArgs, NewArgs, NormalizeArgs, ValidateArgs,
};

/// Folio CLI - create and check paginated workbook projects
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a starter project file
    New(NewArgs),

    /// List pages and the derived table of contents
    Inspect(InspectArgs),

    /// Load a project file and report whether it is valid
    Validate(ValidateArgs),

    /// Resolve overlapping elements on every page
    Normalize(NormalizeArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::New(args) => new(args, &cwd),
            Command::Inspect(args) => inspect(args, &cwd),
            Command::Validate(args) => validate(args, &cwd),
            Command::Normalize(args) => normalize(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
