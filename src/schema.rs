use indexmap::IndexMap;
use serde::Deserialize;

/// Root or nested JSON Schema node.
///
/// Only the schema fields used by the generator are modeled; extra keys in
/// the JSON are ignored via serde's default behavior. `properties` uses
/// `IndexMap` so that field order follows the schema's own property
/// declaration order.
#[derive(Debug, Deserialize)]
pub struct SchemaNode {
    #[serde(default)]
    pub r#type: Option<String>,

    #[serde(default)]
    pub properties: Option<IndexMap<String, Box<SchemaNode>>>,

    #[serde(default)]
    pub required: Option<Vec<String>>,

    #[serde(default)]
    pub items: Option<Box<SchemaNode>>,

    /// Kept as a raw `Value`: the map-detection rule inspects the literal
    /// key set of this sub-schema before deserializing it.
    #[serde(default, rename = "additionalProperties")]
    pub additional_properties: Option<serde_json::Value>,
}

impl SchemaNode {
    /// True when the given property key appears in this node's `required` list.
    pub(crate) fn is_required(&self, key: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|r| r.iter().any(|name| name == key))
    }
}
