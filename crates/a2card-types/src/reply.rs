//! Chat reply envelopes.
//!
//! `AgentReply` is the JSON object a model is instructed to answer with: the
//! text to show, plus optionally a component graph (`a2ui`) to render as a
//! card, or a card it already rendered itself (`adaptiveCard`).
//! `OutgoingMessage` is what the chat layer sends back to the user.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::card::ADAPTIVE_CARD_CONTENT_TYPE;

/// A model's structured reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    #[serde(default)]
    pub text: String,

    /// Component graph to convert into a card. Kept untyped so that a
    /// malformed graph degrades the reply instead of rejecting it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a2ui: Option<Value>,

    /// A card the model produced directly. Attached as-is.
    #[serde(rename = "adaptiveCard", default, skip_serializing_if = "Option::is_none")]
    pub adaptive_card: Option<Value>,
}

impl AgentReply {
    /// A reply with text only.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Rich attachment on an outgoing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub content: Value,
}

impl Attachment {
    /// Wrap an already-serialized Adaptive Card.
    pub fn adaptive_card(content: Value) -> Self {
        Self {
            content_type: ADAPTIVE_CARD_CONTENT_TYPE.to_string(),
            content,
        }
    }
}

/// A message ready to hand to the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl OutgoingMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    pub fn has_card(&self) -> bool {
        self.attachments
            .iter()
            .any(|a| a.content_type == ADAPTIVE_CARD_CONTENT_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_agent_reply_deserialize_with_graph() {
        let reply: AgentReply = serde_json::from_value(json!({
            "text": "Here is the menu",
            "a2ui": {"components": [], "rootComponentId": "root"}
        }))
        .unwrap();
        assert_eq!(reply.text, "Here is the menu");
        assert!(reply.a2ui.is_some());
        assert!(reply.adaptive_card.is_none());
    }

    #[test]
    fn test_agent_reply_deserialize_prerendered_card() {
        let reply: AgentReply = serde_json::from_value(json!({
            "text": "Done",
            "adaptiveCard": {"type": "AdaptiveCard", "version": "1.5", "body": []}
        }))
        .unwrap();
        assert!(reply.a2ui.is_none());
        assert_eq!(reply.adaptive_card.unwrap()["type"], "AdaptiveCard");
    }

    #[test]
    fn test_agent_reply_missing_text_defaults_empty() {
        let reply: AgentReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply, AgentReply::default());
    }

    #[test]
    fn test_outgoing_message_plain_omits_attachments() {
        let json = serde_json::to_value(OutgoingMessage::plain("hello")).unwrap();
        assert_eq!(json, json!({"text": "hello"}));
    }

    #[test]
    fn test_outgoing_message_with_card() {
        let msg = OutgoingMessage {
            text: "menu".to_string(),
            attachments: vec![Attachment::adaptive_card(json!({"type": "AdaptiveCard"}))],
        };
        assert!(msg.has_card());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json["attachments"][0]["contentType"],
            "application/vnd.microsoft.card.adaptive"
        );
    }
}
