//! Rendering nodes into JSON-compatible values and debug text.
//!
//! Output key order: the discriminator (under `type`), then leading tag
//! fields, then the remaining fields in declaration order. Absent fields
//! never appear, not even as `null`. Concrete defaults the caller did not
//! supply are omitted too, except for leading tag fields.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value as Json};

use crate::ir::Field;
use crate::node::{Node, Slot};
use crate::node_type::DISCRIMINATOR_KEY;
use crate::value::Value;

impl Node {
    /// Render this node, and everything it contains, into a JSON value.
    pub fn render(&self) -> Json {
        Json::Object(self.render_map())
    }

    pub fn render_map(&self) -> Map<String, Json> {
        let ty = self.node_type();
        tracing::trace!(node = ty.name(), "render");
        let mut out = Map::new();
        if let Some(d) = ty.discriminator() {
            out.insert(DISCRIMINATOR_KEY.to_owned(), Json::from(d));
        }
        let present = || self.fields().filter_map(|(f, slot)| shown(f, slot).map(|v| (f, v)));
        for (field, value) in present().filter(|(f, _)| f.leading) {
            out.insert(field.name.to_owned(), value.to_json());
        }
        for (field, value) in present().filter(|(f, _)| !f.leading) {
            out.insert(field.name.to_owned(), value.to_json());
        }
        out
    }

    pub fn to_json_string(&self) -> String {
        self.render().to_string()
    }

    pub fn to_json_string_pretty(&self) -> String {
        format!("{:#}", self.render())
    }

    /// `Name(field=value, ..)` over the rendered fields, in declaration order.
    pub fn to_text(&self) -> String {
        format!("{self:?}")
    }
}

impl Value {
    pub fn to_json(&self) -> Json {
        match self {
            Value::Text(s) => Json::from(s.as_str()),
            Value::Integer(n) => Json::from(*n),
            Value::Boolean(b) => Json::from(*b),
            Value::List(xs) => Json::Array(xs.iter().map(Value::to_json).collect()),
            Value::Node(node) => node.render(),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.render().serialize(serializer)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.node_type().name())?;
        let mut first = true;
        for (field, slot) in self.fields() {
            let Some(value) = shown(field, slot) else { continue };
            if !first { f.write_str(", ")?; }
            first = false;
            write!(f, "{}=", field.name)?;
            write_text(value, f)?;
        }
        f.write_str(")")
    }
}

// Output value of a slot, if it is emitted at all.
fn shown<'a>(field: &Field, slot: &'a Slot) -> Option<&'a Value> {
    match slot {
        Slot::Supplied(v) => Some(v),
        Slot::Defaulted(v) if field.leading => Some(v),
        Slot::Defaulted(_) | Slot::Absent => None,
    }
}

fn write_text(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Text(s) => write!(f, "{s:?}"),
        Value::Integer(n) => write!(f, "{n}"),
        Value::Boolean(b) => write!(f, "{b}"),
        Value::List(xs) => {
            f.write_str("[")?;
            for (i, x) in xs.iter().enumerate() {
                if i > 0 { f.write_str(", ")?; }
                write_text(x, f)?;
            }
            f.write_str("]")
        }
        Value::Node(node) => write!(f, "{node:?}"),
    }
}
