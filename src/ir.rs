//! Declaration IR: the closed set of types a node-type field can declare.
//!
//! A field type is one of
//! - a primitive scalar (`str`, `int`, `bool`),
//! - `list<T>`,
//! - `union<T1, .., Tn>` (branches tried in written order),
//! - a concrete node type, or
//! - a node category (any node type of that category or a subtype of it).

use std::fmt;

use crate::node_type::NodeType;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Text,
    Integer,
    Boolean,
}

/// Node type categories, ordered `Block ⊂ Element ⊂ Component`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Plain nested value, no discriminator.
    Component,
    /// Discriminated variant.
    Element,
    /// Discriminated top-level layout unit; carries an optional `block_id`.
    Block,
}

impl Category {
    /// `true` if a node of category `self` is usable where `other` is declared.
    pub fn is_a(self, other: Category) -> bool {
        match other {
            Category::Component => true,
            Category::Element => matches!(self, Category::Element | Category::Block),
            Category::Block => self == Category::Block,
        }
    }
    pub fn is_discriminated(self) -> bool {
        !matches!(self, Category::Component)
    }
    pub fn is_layout_unit(self) -> bool {
        self == Category::Block
    }
    pub fn name(self) -> &'static str {
        match self {
            Category::Component => "Component",
            Category::Element => "Element",
            Category::Block => "Block",
        }
    }
}

#[derive(Clone)]
pub enum FieldType {
    Primitive(Primitive),
    List(Box<FieldType>),
    Union(Vec<FieldType>),
    Node(&'static NodeType),
    Category(Category),
}

impl FieldType {
    pub fn text() -> Self { FieldType::Primitive(Primitive::Text) }
    pub fn integer() -> Self { FieldType::Primitive(Primitive::Integer) }
    pub fn boolean() -> Self { FieldType::Primitive(Primitive::Boolean) }
    pub fn node(ty: &'static NodeType) -> Self { FieldType::Node(ty) }
    pub fn any(category: Category) -> Self { FieldType::Category(category) }

    pub fn list(item: FieldType) -> Self {
        FieldType::List(Box::new(item))
    }

    /// Branch order is kept exactly as given; it is the tie-break for values
    /// accepted by more than one branch.
    pub fn union(branches: impl IntoIterator<Item = FieldType>) -> Self {
        FieldType::Union(branches.into_iter().collect())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Primitive(Primitive::Text) => f.write_str("str"),
            FieldType::Primitive(Primitive::Integer) => f.write_str("int"),
            FieldType::Primitive(Primitive::Boolean) => f.write_str("bool"),
            FieldType::List(item) => write!(f, "list<{item}>"),
            FieldType::Union(branches) => {
                f.write_str("union<")?;
                for (i, b) in branches.iter().enumerate() {
                    if i > 0 { f.write_str(", ")?; }
                    write!(f, "{b}")?;
                }
                f.write_str(">")
            }
            FieldType::Node(ty) => f.write_str(ty.name()),
            FieldType::Category(c) => f.write_str(c.name()),
        }
    }
}

// Node types reference each other; printing the whole graph would be noise.
impl fmt::Debug for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// What a field holds when the caller does not supply it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    /// Must be supplied positionally or by keyword.
    Required,
    /// Optional; omitted from rendering.
    Absent,
    /// Trusted, pre-validated concrete value.
    Value(Value),
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
    pub default: FieldDefault,
    pub leading: bool, // rendered ahead of the other fields (tag fields)
}

impl Field {
    pub fn is_required(&self) -> bool {
        matches!(self.default, FieldDefault::Required)
    }
}
