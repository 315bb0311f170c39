//! Runtime values: what a caller passes to a constructor and what a node stores.

use crate::node::Node;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Boolean(bool),
    List(Vec<Value>),
    Node(Node),
}

impl Value {
    /// Short kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "str",
            Value::Integer(_) => "int",
            Value::Boolean(_) => "bool",
            Value::List(_) => "list",
            Value::Node(node) => node.node_type().name(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(xs) => Some(xs),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Text(s.to_owned()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Text(s) }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self { Value::Text(s.clone()) }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self { Value::Integer(n) }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self { Value::Integer(n.into()) }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self { Value::Integer(n.into()) }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Boolean(b) }
}

impl From<Node> for Value {
    fn from(n: Node) -> Self { Value::Node(n) }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(xs: Vec<T>) -> Self {
        Value::List(xs.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(xs: [T; N]) -> Self {
        Value::List(xs.into_iter().map(Into::into).collect())
    }
}
