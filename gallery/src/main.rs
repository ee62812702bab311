//! gallery - Runs the patternbook demonstrations from the command line
//!
//! Usage:
//!   gallery list [--family <family>]
//!   gallery run <name>... | --all [--format text|json]
//!   gallery verify [<name>...]

mod list;
mod run;
mod verify;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "List, run and verify design pattern demonstrations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available demos
    List(list::ListArgs),
    /// Run demos and print their transcripts
    Run(run::RunArgs),
    /// Check demo transcripts against their expected output
    Verify(verify::VerifyArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let catalogue = patternbook::harness::Catalogue::builtin();
    tracing::debug!(demos = catalogue.len(), "catalogue loaded");

    match cli.command {
        Commands::List(args) => list::run(&catalogue, &args),
        Commands::Run(args) => run::run(&catalogue, &args),
        Commands::Verify(args) => verify::run(&catalogue, &args),
    }
}
