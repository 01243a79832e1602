//! CLI command definitions and dispatch for the `a2card` binary.
//!
//! Uses clap derive macros for argument parsing. Every command reads its
//! payload from a file argument or, when none is given, from stdin.

pub mod convert;
pub mod inspect;
pub mod reply;
pub mod schema;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use tokio::io::AsyncReadExt;

/// Render platform-neutral UI component graphs as Adaptive Cards.
#[derive(Parser)]
#[command(name = "a2card", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of `<data dir>/config.toml`.
    #[arg(long, global = true, env = "A2CARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export tracing spans via OpenTelemetry. The exporter writes to stdout,
    /// interleaved with command output; do not pipe the output into a JSON
    /// consumer while this is on.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a component graph into an Adaptive Card.
    Convert {
        /// Graph JSON file (reads stdin when omitted).
        file: Option<PathBuf>,

        /// Print the card on a single line.
        #[arg(long)]
        compact: bool,
    },

    /// Report dangling references, unknown types, cycles, and unreachable
    /// components in a graph.
    #[command(alias = "check")]
    Inspect {
        /// Graph JSON file (reads stdin when omitted).
        file: Option<PathBuf>,

        /// Exit with an error when any issue is found.
        #[arg(long)]
        strict: bool,
    },

    /// Turn a raw model reply into the outgoing chat message.
    Reply {
        /// Reply file (reads stdin when omitted).
        file: Option<PathBuf>,
    },

    /// Print the JSON Schema of the component graph (structured output).
    Schema,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Read a command's payload from `file`, or stdin when it is `None`.
pub async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_with_globals() {
        let cli = Cli::parse_from(["a2card", "-vv", "convert", "graph.json", "--compact"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Convert { file, compact } => {
                assert_eq!(file, Some(PathBuf::from("graph.json")));
                assert!(compact);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_parse_check_alias() {
        let cli = Cli::parse_from(["a2card", "check", "--strict", "--json"]);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Inspect { file: None, strict: true }));
    }

    #[test]
    fn test_otel_help_warns_about_stdout() {
        let cmd = Cli::command();
        let otel = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "otel")
            .unwrap();
        let help = otel.get_long_help().or(otel.get_help()).unwrap().to_string();
        assert!(help.contains("stdout"), "help: {help}");
    }

    #[tokio::test]
    async fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        tokio::fs::write(&path, "{}").await.unwrap();
        assert_eq!(read_input(Some(&path)).await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_read_input_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(&dir.path().join("nope.json"))).await.unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }
}
