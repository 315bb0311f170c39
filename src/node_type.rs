//! Node type declarations and the builder used to write them.
//!
//! Every category decides its synthetic fields explicitly: elements and
//! blocks get a discriminator (the lowercased type name unless overridden),
//! blocks also get an optional `block_id` appended as their last field.

use crate::ir::{Category, Field, FieldDefault, FieldType, Primitive};
use crate::value::Value;

/// Key the discriminator is rendered under.
pub const DISCRIMINATOR_KEY: &str = "type";

/// Optional identifier field every layout unit carries.
pub const IDENTIFIER_FIELD: &str = "block_id";

/// Custom coercion a node type applies when it is the declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Accept a raw string by wrapping it into a new instance, the string
    /// going into `field` and every other field taking its default.
    WrapText { field: &'static str },
}

#[derive(Debug)]
pub struct NodeType {
    name: &'static str,
    category: Category,
    discriminator: Option<String>,
    fields: Vec<Field>,
    coercion: Option<Coercion>,
}

impl NodeType {
    pub fn component(name: &'static str) -> NodeTypeBuilder {
        NodeTypeBuilder::new(name, Category::Component)
    }
    pub fn element(name: &'static str) -> NodeTypeBuilder {
        NodeTypeBuilder::new(name, Category::Element)
    }
    pub fn block(name: &'static str) -> NodeTypeBuilder {
        NodeTypeBuilder::new(name, Category::Block)
    }

    pub fn name(&self) -> &'static str { self.name }
    pub fn category(&self) -> Category { self.category }
    pub fn discriminator(&self) -> Option<&str> { self.discriminator.as_deref() }
    pub fn coercion(&self) -> Option<Coercion> { self.coercion }

    /// Fields in declaration order, which is also positional binding order.
    pub fn fields(&self) -> &[Field] { &self.fields }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub(crate) fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

// Declarations are static: identity is the address.
impl PartialEq for NodeType {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for NodeType {}

pub struct NodeTypeBuilder {
    ty: NodeType,
}

impl NodeTypeBuilder {
    fn new(name: &'static str, category: Category) -> Self {
        let discriminator = category
            .is_discriminated()
            .then(|| name.to_lowercase());
        Self {
            ty: NodeType {
                name,
                category,
                discriminator,
                fields: Vec::new(),
                coercion: None,
            },
        }
    }

    pub fn required(self, name: &'static str, ty: FieldType) -> Self {
        self.push(name, ty, FieldDefault::Required, false)
    }

    pub fn optional(self, name: &'static str, ty: FieldType) -> Self {
        self.push(name, ty, FieldDefault::Absent, false)
    }

    /// A field with a concrete default. The default is trusted as-is.
    pub fn defaulted(self, name: &'static str, ty: FieldType, default: impl Into<Value>) -> Self {
        self.push(name, ty, FieldDefault::Value(default.into()), false)
    }

    /// A caller-overridable string tag, rendered ahead of the other fields.
    pub fn tag(self, name: &'static str, default: &str) -> Self {
        self.push(name, FieldType::text(), FieldDefault::Value(Value::from(default)), true)
    }

    pub fn discriminator(mut self, discriminator: &str) -> Self {
        self.ty.discriminator = Some(discriminator.to_owned());
        self
    }

    pub fn coerce_text(mut self, field: &'static str) -> Self {
        self.ty.coercion = Some(Coercion::WrapText { field });
        self
    }

    pub fn build(self) -> NodeType {
        if let Some(Coercion::WrapText { field }) = self.ty.coercion {
            debug_assert!(
                self.ty.field(field).is_some_and(|f| matches!(f.ty, FieldType::Primitive(Primitive::Text))),
                "{}: coercion target `{field}` is not a declared str field",
                self.ty.name,
            );
        }
        let mut this = self;
        if this.ty.category.is_layout_unit() && this.ty.field(IDENTIFIER_FIELD).is_none() {
            this = this.optional(IDENTIFIER_FIELD, FieldType::text());
        }
        this.ty
    }

    // A repeated name replaces the earlier declaration in place.
    fn push(mut self, name: &'static str, ty: FieldType, default: FieldDefault, leading: bool) -> Self {
        let field = Field { name, ty, default, leading };
        match self.ty.field_index(name) {
            Some(i) => self.ty.fields[i] = field,
            None => self.ty.fields.push(field),
        }
        self
    }
}
