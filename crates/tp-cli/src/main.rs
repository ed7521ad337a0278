mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::cli::root_commands::Commands;
use crate::context::AppContext;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tutorpilot error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    let flags = cli.global_flags();
    ui::init(&flags);

    let result = match &cli.command {
        // Offline commands never touch configuration or the backend.
        Commands::Schema(args) => commands::schema::handle(args, &flags),
        Commands::Render { kind } => commands::render::handle(kind),
        command => {
            let ctx = AppContext::init(&flags).context("failed to initialize tutorpilot")?;
            commands::dispatch::dispatch(command, &ctx, &flags).await
        }
    };

    if let Err(error) = &result {
        tracing::error!(error = %format!("{error:#}"), "command failed");
    }
    result
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env("TUTORPILOT_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing: {error}"))?;
    Ok(())
}
