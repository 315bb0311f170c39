//! JSON-schema-ish description of node type declarations.
//!
//! Node references become `$ref`s into `#/definitions`; categories expand to
//! an `anyOf` over every type in the catalog that belongs to them.

use serde_json::{json, Map, Value};

use crate::ir::{FieldDefault, FieldType, Primitive};
use crate::node_type::{Coercion, NodeType, DISCRIMINATOR_KEY};

/// Describe one node type. `catalog` resolves category references.
pub fn describe(ty: &NodeType, catalog: &[&'static NodeType]) -> Value {
    let mut props = Map::new();
    let mut required = Vec::<Value>::new();

    if let Some(d) = ty.discriminator() {
        props.insert(DISCRIMINATOR_KEY.into(), json!({ "const": d }));
        required.push(Value::from(DISCRIMINATOR_KEY));
    }
    for field in ty.fields() {
        let mut schema = field_schema(&field.ty, catalog);
        match &field.default {
            FieldDefault::Required => required.push(Value::from(field.name)),
            FieldDefault::Value(v) => { schema["default"] = v.to_json(); }
            FieldDefault::Absent => {}
        }
        props.insert(field.name.into(), schema);
    }

    let mut map = Map::new();
    map.insert("title".into(), Value::from(ty.name()));
    map.insert("type".into(), Value::from("object"));
    map.insert("properties".into(), Value::Object(props));
    if !required.is_empty() {
        map.insert("required".into(), Value::Array(required));
    }
    map.insert("additionalProperties".into(), Value::from(false));
    Value::Object(map)
}

/// `{"definitions": {..}}` over `types`, which also serve as the catalog.
pub fn describe_all(types: &[&'static NodeType]) -> Value {
    let defs: Map<String, Value> = types
        .iter()
        .map(|ty| (ty.name().to_owned(), describe(ty, types)))
        .collect();
    json!({ "definitions": defs })
}

pub fn field_schema(ty: &FieldType, catalog: &[&'static NodeType]) -> Value {
    match ty {
        FieldType::Primitive(Primitive::Text) => json!({ "type": "string" }),
        FieldType::Primitive(Primitive::Integer) => json!({ "type": "integer" }),
        FieldType::Primitive(Primitive::Boolean) => json!({ "type": "boolean" }),
        FieldType::List(item) => json!({
            "type": "array",
            "items": field_schema(item, catalog),
        }),
        FieldType::Union(branches) => json!({
            "anyOf": branches.iter().map(|b| field_schema(b, catalog)).collect::<Vec<_>>()
        }),
        FieldType::Node(node) => match node.coercion() {
            Some(Coercion::WrapText { .. }) => json!({ "anyOf": [reference(node), { "type": "string" }] }),
            None => reference(node),
        },
        FieldType::Category(category) => {
            let arms = catalog
                .iter()
                .filter(|t| t.category().is_a(*category))
                .map(|t| reference(t))
                .collect::<Vec<_>>();
            json!({ "anyOf": arms })
        }
    }
}

fn reference(ty: &NodeType) -> Value {
    json!({ "$ref": format!("#/definitions/{}", ty.name()) })
}
