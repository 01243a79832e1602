//! Model reply handling around the converter.
//!
//! The chat layer asks the model for a JSON object (`AgentReply`), converts
//! any component graph it carries into a card, and sends text plus card back
//! to the user. Every failure here degrades to plain text; a reply is never
//! lost because its card could not be built.

use a2card_types::component::ComponentGraph;
use a2card_types::error::GraphError;
use a2card_types::reply::{AgentReply, Attachment, OutgoingMessage};
use serde_json::Value;

use crate::converter::Converter;

/// Prefix for prompts synthesized from card submit actions.
pub const ACTION_PROMPT_PREFIX: &str = "User performed action: ";

/// Parse the raw model output. Text that is not a JSON reply object is
/// kept as the reply text.
pub fn parse_agent_reply(raw: &str) -> AgentReply {
    match serde_json::from_str::<AgentReply>(raw) {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(error = %err, "model reply is not a JSON reply object, using it as text");
            AgentReply::text(raw)
        }
    }
}

/// Parse a component graph from JSON text.
pub fn parse_graph(raw: &str) -> Result<ComponentGraph, GraphError> {
    if raw.trim().is_empty() {
        return Err(GraphError::Empty);
    }
    serde_json::from_str(raw).map_err(|e| GraphError::InvalidJson(e.to_string()))
}

/// Parse a component graph from an already-decoded JSON value.
pub fn graph_from_value(value: Value) -> Result<ComponentGraph, GraphError> {
    serde_json::from_value(value).map_err(|e| GraphError::InvalidJson(e.to_string()))
}

/// Build the outgoing message for a reply.
///
/// - `a2ui` present: converted into an Adaptive Card attachment. A graph
///   that does not parse is dropped and the text goes out alone.
/// - `adaptiveCard` present: attached untouched.
pub fn compose_message(converter: &Converter, reply: AgentReply) -> OutgoingMessage {
    let mut message = OutgoingMessage::plain(reply.text);

    if let Some(payload) = reply.a2ui {
        match graph_from_value(payload) {
            Ok(graph) => {
                let card = converter.convert(&graph);
                match serde_json::to_value(&card) {
                    Ok(content) => message.attachments.push(Attachment::adaptive_card(content)),
                    Err(err) => tracing::warn!(error = %err, "failed to serialize card, sending text only"),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed component graph, sending text only");
            }
        }
    }

    if let Some(card) = reply.adaptive_card {
        message.attachments.push(Attachment::adaptive_card(card));
    }

    message
}

/// Turn an inbound chat message into model input.
///
/// Typed text wins. Without text, a card submission becomes a synthesized
/// prompt describing the submitted data. A missing or empty submission
/// (`null`, `false`, `0`, `""`) yields `None`.
pub fn submit_prompt(text: Option<&str>, value: Option<&Value>) -> Option<String> {
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        return Some(text.to_string());
    }
    let value = value.filter(|v| is_submitted(v))?;
    Some(format!("{ACTION_PROMPT_PREFIX}{value}"))
}

/// Objects and arrays always count, even when empty.
fn is_submitted(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
