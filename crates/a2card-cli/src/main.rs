//! a2card CLI entry point.
//!
//! Binary name: `a2card`
//!
//! Parses CLI arguments, sets up tracing, loads configuration, then
//! dispatches to the command handler.

mod cli;
mod config;

use a2card_core::Converter;
use a2card_observe::tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};
use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let tracing_options = TracingOptions {
        json: cli.log_json,
        otel: cli.otel,
        ..TracingOptions::from_verbosity(cli.verbose, cli.quiet)
    };
    init_tracing(&tracing_options).map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Convert { file, compact } => {
            let converter = load_converter(cli.config.as_deref()).await?;
            cli::convert::convert(&converter, file.as_deref(), compact).await?;
        }
        Commands::Inspect { file, strict } => {
            cli::inspect::inspect(file.as_deref(), strict, cli.json).await?;
        }
        Commands::Reply { file } => {
            let converter = load_converter(cli.config.as_deref()).await?;
            cli::reply::reply(&converter, file.as_deref(), cli.quiet).await?;
        }
        Commands::Schema => cli::schema::schema()?,
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "a2card", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Only the commands that render cards read configuration.
async fn load_converter(explicit: Option<&std::path::Path>) -> anyhow::Result<Converter> {
    let app_config = config::resolve_config(explicit).await?;
    Ok(Converter::new(app_config.converter))
}
