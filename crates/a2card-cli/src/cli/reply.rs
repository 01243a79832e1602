//! `a2card reply`: raw model output in, outgoing chat message out.

use std::path::Path;

use a2card_core::Converter;
use a2card_core::reply::{compose_message, parse_agent_reply};
use anyhow::Result;
use console::style;

use super::read_input;

/// Parse a model reply, convert any graph it carries, and print the message.
///
/// Always prints JSON: the message is meant for a transport layer. A status
/// line on stderr says whether a card was attached, unless `quiet`.
pub async fn reply(converter: &Converter, file: Option<&Path>, quiet: bool) -> Result<()> {
    let raw = read_input(file).await?;
    let message = compose_message(converter, parse_agent_reply(&raw));

    println!("{}", serde_json::to_string_pretty(&message)?);
    if !quiet {
        if message.has_card() {
            eprintln!("  {} card attached", style("ok").green().bold());
        } else {
            eprintln!("  {} text only", style("--").dim());
        }
    }
    Ok(())
}
