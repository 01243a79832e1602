//! Component graph types.
//!
//! `ComponentGraph` and `RawComponent` mirror the JSON payload a model emits:
//! a flat list of components that reference each other by id, plus the id of
//! the root. `Component` is the typed form: the open `properties` map is
//! decoded once into a `ComponentKind` carrying only the fields its render
//! rule needs, with defaults already applied.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Label used for a button when `properties.label` is missing.
pub const DEFAULT_BUTTON_LABEL: &str = "Click";

/// Alt text used for an image when `properties.alt` is missing.
pub const DEFAULT_IMAGE_ALT: &str = "Image";

/// The full component graph as received from the generating source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComponentGraph {
    /// All components, in any order. Ids should be unique; when they are
    /// not, the last component with a given id wins. Entries that are not
    /// component objects are skipped.
    #[serde(default, deserialize_with = "skip_malformed_components")]
    #[schemars(with = "Vec<RawComponent>")]
    pub components: Vec<RawComponent>,

    /// Id of the component to render as the card body.
    #[serde(rename = "rootComponentId", default)]
    pub root_component_id: String,

    /// Auxiliary data bound by the generating source. Carried, never read.
    #[serde(rename = "dataModel", default, skip_serializing_if = "Option::is_none")]
    pub data_model: Option<Value>,
}

impl ComponentGraph {
    /// Build a graph from components and a root id, without a data model.
    pub fn new(components: Vec<RawComponent>, root_component_id: impl Into<String>) -> Self {
        Self {
            components,
            root_component_id: root_component_id.into(),
            data_model: None,
        }
    }
}

/// One node of the component graph, exactly as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RawComponent {
    /// Unique id within the graph.
    pub id: String,

    /// Type tag: `Column`, `Form`, `Row`, `Card`, `Text`, `Image`,
    /// `Button`, or `Input`. Anything else, including a missing or
    /// non-string tag, is dropped when rendering.
    #[serde(rename = "type", default, deserialize_with = "string_or_empty")]
    #[schemars(with = "String")]
    pub component_type: String,

    /// Type-specific properties (`title`, `text`, `src`, `alt`, `label`,
    /// `action`, `type`, `placeholder`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,

    /// Ordered ids of child components. Non-string entries are skipped.
    #[serde(
        default,
        deserialize_with = "string_ids",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Vec<String>>")]
    pub children: Option<Vec<String>>,
}

fn skip_malformed_components<'de, D>(deserializer: D) -> Result<Vec<RawComponent>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn string_ids<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(id) => Some(id),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

impl RawComponent {
    pub fn new(id: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            properties: None,
            children: None,
        }
    }

    pub fn with_properties(mut self, properties: Value) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = Some(children.into_iter().map(Into::into).collect());
        self
    }

    /// Look up a property by key. Absent when `properties` is missing or is
    /// not a JSON object.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.as_object()?.get(key)
    }

    /// Read a property as display text.
    ///
    /// Strings are used as-is, numbers and `true` are stringified. Empty
    /// strings, `null`, `false`, zero, arrays and objects count as absent.
    pub fn text_property(&self, key: &str) -> Option<String> {
        match self.property(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()) => {
                Some(n.to_string())
            }
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

/// Leaf input flavours, selected by `properties.type` on an `Input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Date,
    Time,
    Number,
}

impl InputKind {
    /// Map a `properties.type` value to an input kind. Unrecognized or
    /// missing values fall back to `Text`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("date") => InputKind::Date,
            Some("time") => InputKind::Time,
            Some("number") => InputKind::Number,
            _ => InputKind::Text,
        }
    }
}

/// Typed, per-type view of a component's properties.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentKind {
    /// Vertical stack of children. Both `Column` and `Form` decode to this.
    Column,
    /// Horizontal row; each child gets its own equal-width column.
    Row,
    /// Emphasized container with a title header.
    Card { title: String },
    Text { text: String },
    /// `src` is `None` when missing or empty; the renderer substitutes the
    /// configured fallback URL.
    Image { src: Option<String>, alt: String },
    /// `action` is passed through verbatim, including an explicit `null`.
    Button { label: String, action: Option<Value> },
    Input {
        input: InputKind,
        placeholder: Option<Value>,
    },
    /// Any tag outside the supported vocabulary.
    Unknown { tag: String },
}

impl ComponentKind {
    /// Decode the kind of a raw component, resolving property defaults.
    pub fn decode(raw: &RawComponent) -> Self {
        match raw.component_type.as_str() {
            "Column" | "Form" => ComponentKind::Column,
            "Row" => ComponentKind::Row,
            "Card" => ComponentKind::Card {
                title: raw.text_property("title").unwrap_or_default(),
            },
            "Text" => ComponentKind::Text {
                text: raw.text_property("text").unwrap_or_default(),
            },
            "Image" => ComponentKind::Image {
                src: raw.text_property("src"),
                alt: raw
                    .text_property("alt")
                    .unwrap_or_else(|| DEFAULT_IMAGE_ALT.to_string()),
            },
            "Button" => ComponentKind::Button {
                label: raw
                    .text_property("label")
                    .unwrap_or_else(|| DEFAULT_BUTTON_LABEL.to_string()),
                action: raw.property("action").cloned(),
            },
            "Input" => ComponentKind::Input {
                input: InputKind::from_tag(raw.property("type").and_then(Value::as_str)),
                placeholder: raw.property("placeholder").cloned(),
            },
            other => ComponentKind::Unknown {
                tag: other.to_string(),
            },
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ComponentKind::Unknown { .. })
    }
}

/// A decoded component: id, ordered children, and typed kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: String,
    /// The wire type tag, kept for diagnostics.
    pub tag: String,
    pub children: Vec<String>,
    pub kind: ComponentKind,
}

impl From<&RawComponent> for Component {
    fn from(raw: &RawComponent) -> Self {
        Self {
            id: raw.id.clone(),
            tag: raw.component_type.clone(),
            children: raw.children.clone().unwrap_or_default(),
            kind: ComponentKind::decode(raw),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_graph_deserialize_wire_names() {
        let graph: ComponentGraph = serde_json::from_value(json!({
            "components": [
                {"id": "r", "type": "Column", "children": ["t"]},
                {"id": "t", "type": "Text", "properties": {"text": "Hi"}}
            ],
            "rootComponentId": "r",
            "dataModel": {"user": "ada"}
        }))
        .unwrap();

        assert_eq!(graph.root_component_id, "r");
        assert_eq!(graph.components.len(), 2);
        assert_eq!(graph.components[0].component_type, "Column");
        assert_eq!(graph.components[0].children.as_deref(), Some(&["t".to_string()][..]));
        assert!(graph.components[1].children.is_none());
        assert_eq!(graph.data_model, Some(json!({"user": "ada"})));
    }

    #[test]
    fn test_graph_deserialize_missing_fields_default() {
        let graph: ComponentGraph = serde_json::from_str("{}").unwrap();
        assert!(graph.components.is_empty());
        assert!(graph.root_component_id.is_empty());
        assert!(graph.data_model.is_none());
    }

    #[test]
    fn test_graph_deserialize_tolerates_bad_components() {
        let graph: ComponentGraph = serde_json::from_value(json!({
            "components": [
                {"id": "no-type", "properties": {"text": "x"}},
                {"id": "null-type", "type": null},
                {"id": "r", "type": "Column", "children": ["a", 7, null, "b"]},
                {"id": "odd-children", "type": "Row", "children": "a"},
                42,
                {"type": "Text"}
            ],
            "rootComponentId": "r"
        }))
        .unwrap();

        let ids: Vec<&str> = graph.components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["no-type", "null-type", "r", "odd-children"]);
        assert_eq!(graph.components[0].component_type, "");
        assert_eq!(graph.components[1].component_type, "");
        assert_eq!(
            graph.components[2].children,
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert!(graph.components[3].children.is_none());
        assert!(!ComponentKind::decode(&graph.components[0]).is_known());
    }

    #[test]
    fn test_graph_deserialize_rejects_non_list_components() {
        let result = serde_json::from_value::<ComponentGraph>(json!({"components": "nope"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_property_ignores_non_object_properties() {
        let raw = RawComponent::new("x", "Text").with_properties(json!(["not", "a", "map"]));
        assert!(raw.property("text").is_none());
    }

    #[test]
    fn test_text_property_falsy_values_are_absent() {
        for value in [json!(""), json!(null), json!(false), json!(0), json!({}), json!([])] {
            let raw = RawComponent::new("x", "Text").with_properties(json!({ "text": value.clone() }));
            assert_eq!(raw.text_property("text"), None, "value {value} should be absent");
        }
    }

    #[test]
    fn test_text_property_stringifies_scalars() {
        let raw = RawComponent::new("x", "Text").with_properties(json!({"a": 42, "b": true, "c": "hey"}));
        assert_eq!(raw.text_property("a").as_deref(), Some("42"));
        assert_eq!(raw.text_property("b").as_deref(), Some("true"));
        assert_eq!(raw.text_property("c").as_deref(), Some("hey"));
    }

    #[test]
    fn test_input_kind_from_tag() {
        assert_eq!(InputKind::from_tag(Some("date")), InputKind::Date);
        assert_eq!(InputKind::from_tag(Some("time")), InputKind::Time);
        assert_eq!(InputKind::from_tag(Some("number")), InputKind::Number);
        assert_eq!(InputKind::from_tag(Some("email")), InputKind::Text);
        assert_eq!(InputKind::from_tag(None), InputKind::Text);
    }

    #[test]
    fn test_decode_form_shares_column_kind() {
        let form = Component::from(&RawComponent::new("f", "Form"));
        assert_eq!(form.kind, ComponentKind::Column);
        assert_eq!(form.tag, "Form");
        assert!(form.children.is_empty());
    }

    #[test]
    fn test_decode_defaults() {
        let card = ComponentKind::decode(&RawComponent::new("c", "Card"));
        assert_eq!(card, ComponentKind::Card { title: String::new() });

        let image = ComponentKind::decode(
            &RawComponent::new("i", "Image").with_properties(json!({"src": ""})),
        );
        assert_eq!(
            image,
            ComponentKind::Image {
                src: None,
                alt: "Image".to_string()
            }
        );

        let button = ComponentKind::decode(&RawComponent::new("b", "Button"));
        assert_eq!(
            button,
            ComponentKind::Button {
                label: "Click".to_string(),
                action: None
            }
        );
    }

    #[test]
    fn test_decode_button_keeps_action_verbatim() {
        let raw = RawComponent::new("b", "Button")
            .with_properties(json!({"label": "Order", "action": {"kind": "submit", "sku": 7}}));
        match ComponentKind::decode(&raw) {
            ComponentKind::Button { label, action } => {
                assert_eq!(label, "Order");
                assert_eq!(action, Some(json!({"kind": "submit", "sku": 7})));
            }
            other => panic!("expected button, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_input_non_string_type_falls_back_to_text() {
        let raw = RawComponent::new("in", "Input").with_properties(json!({"type": 3}));
        assert_eq!(
            ComponentKind::decode(&raw),
            ComponentKind::Input {
                input: InputKind::Text,
                placeholder: None
            }
        );
    }

    #[test]
    fn test_decode_unknown_tag() {
        let kind = ComponentKind::decode(&RawComponent::new("x", "Carousel"));
        assert_eq!(
            kind,
            ComponentKind::Unknown {
                tag: "Carousel".to_string()
            }
        );
        assert!(!kind.is_known());
    }
}
