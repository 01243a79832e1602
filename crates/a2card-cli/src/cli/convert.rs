//! `a2card convert`: component graph in, Adaptive Card out.

use std::path::Path;

use a2card_core::Converter;
use a2card_core::reply::parse_graph;
use anyhow::Result;

use super::read_input;

/// Read a graph, convert it, and print the card as JSON.
///
/// # Examples
///
/// ```bash
/// a2card convert graph.json
/// cat graph.json | a2card convert --compact
/// ```
pub async fn convert(converter: &Converter, file: Option<&Path>, compact: bool) -> Result<()> {
    let raw = read_input(file).await?;
    println!("{}", render_card(converter, &raw, compact)?);
    Ok(())
}

/// Convert graph JSON text into card JSON text.
pub fn render_card(converter: &Converter, raw: &str, compact: bool) -> Result<String> {
    let graph = parse_graph(raw)?;
    let card = converter.convert(&graph);
    let out = if compact {
        serde_json::to_string(&card)?
    } else {
        serde_json::to_string_pretty(&card)?
    };
    Ok(out)
}
