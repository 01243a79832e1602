//! Adaptive Card presentation tree.
//!
//! The subset of the Adaptive Card 1.5 schema the converter emits. Field
//! names and enum literals are part of the wire contract with the client
//! renderer and are reproduced exactly (`"stretch"`, `"Bolder"`,
//! `"emphasis"`, `"Action.Submit"`, ...).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema version stamped on every card.
pub const CARD_SCHEMA_VERSION: &str = "1.5";

/// Attachment content type for an Adaptive Card in a chat message.
pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

/// Image shown when an `Image` component has no usable `src`. The client
/// renderer must never receive an empty URL.
pub const DEFAULT_FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=500";

/// Top-level card envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "AdaptiveCard")]
pub struct AdaptiveCard {
    pub version: String,
    pub body: Vec<CardElement>,
}

impl AdaptiveCard {
    pub fn new(body: Vec<CardElement>) -> Self {
        Self {
            version: CARD_SCHEMA_VERSION.to_string(),
            body,
        }
    }

    /// A card with an empty body.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Total number of elements in the body, counted recursively.
    pub fn element_count(&self) -> usize {
        self.body.iter().map(CardElement::element_count).sum()
    }
}

/// One element of the card body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CardElement {
    Container(Container),
    ColumnSet(ColumnSet),
    TextBlock(TextBlock),
    Image(Image),
    ActionSet(ActionSet),
    #[serde(rename = "Input.Text")]
    InputText(InputField),
    #[serde(rename = "Input.Date")]
    InputDate(InputField),
    #[serde(rename = "Input.Time")]
    InputTime(InputField),
    #[serde(rename = "Input.Number")]
    InputNumber(InputField),
}

impl CardElement {
    /// The wire `type` literal of this element.
    pub fn type_name(&self) -> &'static str {
        match self {
            CardElement::Container(_) => "Container",
            CardElement::ColumnSet(_) => "ColumnSet",
            CardElement::TextBlock(_) => "TextBlock",
            CardElement::Image(_) => "Image",
            CardElement::ActionSet(_) => "ActionSet",
            CardElement::InputText(_) => "Input.Text",
            CardElement::InputDate(_) => "Input.Date",
            CardElement::InputTime(_) => "Input.Time",
            CardElement::InputNumber(_) => "Input.Number",
        }
    }

    /// This element plus everything nested under it. Column wrappers inside
    /// a `ColumnSet` are layout, not elements, and are not counted.
    pub fn element_count(&self) -> usize {
        let nested: usize = match self {
            CardElement::Container(container) => {
                container.items.iter().map(Self::element_count).sum()
            }
            CardElement::ColumnSet(set) => set
                .columns
                .iter()
                .flat_map(|column| column.items.iter())
                .map(Self::element_count)
                .sum(),
            _ => 0,
        };
        1 + nested
    }
}

/// Vertical group of elements, optionally styled as an emphasized panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    pub items: Vec<CardElement>,
}

impl Container {
    /// Plain container, no styling.
    pub fn stack(items: Vec<CardElement>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Bordered, bleeding, separated panel with medium spacing.
    pub fn emphasis(items: Vec<CardElement>) -> Self {
        Self {
            style: Some(ContainerStyle::Emphasis),
            bleed: Some(true),
            separator: Some(true),
            spacing: Some(Spacing::Medium),
            items,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSet {
    pub columns: Vec<Column>,
}

/// A column inside a `ColumnSet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Column")]
pub struct Column {
    pub width: ColumnWidth,
    pub items: Vec<CardElement>,
}

impl Column {
    /// Equal-width column.
    pub fn stretch(items: Vec<CardElement>) -> Self {
        Self {
            width: ColumnWidth::Stretch,
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    pub wrap: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
}

impl TextBlock {
    /// Wrapped body text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: None,
            size: None,
            wrap: true,
            color: None,
        }
    }

    /// Bold, large, accent-colored header.
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            weight: Some(FontWeight::Bolder),
            size: Some(TextSize::Large),
            color: Some(TextColor::Accent),
            ..Self::plain(text)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(rename = "altText")]
    pub alt_text: String,
    pub size: ImageSize,
    pub style: ImageStyle,
    #[serde(rename = "horizontalAlignment")]
    pub horizontal_alignment: HorizontalAlignment,
}

impl Image {
    /// Large, centered image with default style.
    pub fn centered(url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: alt_text.into(),
            size: ImageSize::Large,
            style: ImageStyle::Default,
            horizontal_alignment: HorizontalAlignment::Center,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionSet {
    pub actions: Vec<CardAction>,
}

impl ActionSet {
    /// An action set holding a single submit action.
    pub fn submit(title: impl Into<String>, action: Option<Value>) -> Self {
        Self {
            actions: vec![CardAction::Submit(SubmitAction {
                title: title.into(),
                data: SubmitData { action },
            })],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CardAction {
    #[serde(rename = "Action.Submit")]
    Submit(SubmitAction),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitAction {
    pub title: String,
    pub data: SubmitData,
}

/// Payload echoed back to the bot when the action is invoked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Value>,
}

/// Shared shape of the `Input.*` elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Value>,
}

// ---------------------------------------------------------------------------
// Style literals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerStyle {
    #[serde(rename = "emphasis")]
    Emphasis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spacing {
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnWidth {
    #[serde(rename = "stretch")]
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Bolder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSize {
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextColor {
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageStyle {
    #[serde(rename = "default")]
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    Center,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
