//! `a2card schema`: JSON Schema of the component graph.

use a2card_types::schema::graph_schema;
use anyhow::Result;

/// Print the schema to hand to a model as its structured-output contract.
pub fn schema() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&graph_schema())?);
    Ok(())
}
