//! JSON Schema of the component graph, for structured-output requests.

use serde_json::Value;

use crate::component::ComponentGraph;

/// Generate the JSON Schema for `ComponentGraph` with
/// `additionalProperties: false` on every object schema.
pub fn graph_schema() -> Value {
    let schema = schemars::schema_for!(ComponentGraph);
    let mut value = serde_json::to_value(schema).unwrap_or(Value::Null);
    add_additional_properties_false(&mut value);
    value
}

/// Recursively set `additionalProperties: false` on every schema node that
/// declares `properties`. Nodes that already set the key are left alone.
pub fn add_additional_properties_false(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.contains_key("properties") && !map.contains_key("additionalProperties") {
                map.insert("additionalProperties".to_string(), Value::Bool(false));
            }
            for (key, child) in map.iter_mut() {
                match (key.as_str(), child) {
                    // Keyed by property or definition name, not schemas themselves.
                    ("properties" | "$defs" | "definitions", Value::Object(named)) => {
                        for schema in named.values_mut() {
                            add_additional_properties_false(schema);
                        }
                    }
                    (_, child) => add_additional_properties_false(child),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                add_additional_properties_false(item);
            }
        }
        _ => {}
    }
}
