//! Node instances and their validated construction.

use indexmap::IndexMap;

use crate::error::ValidationError;
use crate::ir::{Field, FieldDefault};
use crate::node_type::NodeType;
use crate::validate::validate;
use crate::value::Value;

/// Per-field storage. Absence is its own state, never a null-like value.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Absent,
    /// Declared default, stored without validation.
    Defaulted(Value),
    /// Caller-supplied and validated.
    Supplied(Value),
}

impl Slot {
    pub fn value(&self) -> Option<&Value> {
        match self {
            Slot::Absent => None,
            Slot::Defaulted(v) | Slot::Supplied(v) => Some(v),
        }
    }
    pub fn is_absent(&self) -> bool {
        matches!(self, Slot::Absent)
    }
    pub fn is_supplied(&self) -> bool {
        matches!(self, Slot::Supplied(_))
    }
}

/// A validated, immutable instance of a node type.
#[derive(Clone)]
pub struct Node {
    ty: &'static NodeType,
    slots: Vec<Slot>, // parallel to `ty.fields()`
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.slots == other.slots
    }
}

impl Node {
    pub fn node_type(&self) -> &'static NodeType {
        self.ty
    }

    /// `true` if this is an instance of exactly `ty`.
    pub fn is(&self, ty: &NodeType) -> bool {
        self.ty == ty
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.ty.field_index(name).map(|i| &self.slots[i])
    }

    /// The stored value of a field, `None` if absent or undeclared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.slot(name).and_then(Slot::value)
    }

    /// Fields paired with their slots, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static Field, &Slot)> + '_ {
        self.ty.fields().iter().zip(self.slots.iter())
    }
}

/// Constructor arguments: positional values bound in declaration order, then
/// keyword values bound by name.
#[derive(Debug, Clone, Default)]
pub struct Args {
    positional: Vec<Value>,
    keywords: IndexMap<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// A repeated keyword replaces the earlier value.
    pub fn kw(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(name.into(), value.into());
        self
    }

    /// Keyword that is only set when `value` is `Some`.
    pub fn kw_opt<V: Into<Value>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.kw(name, v),
            None => self,
        }
    }
}

impl NodeType {
    /// Build an instance, validating every supplied argument. Either every
    /// field is valid and an instance is returned, or nothing is.
    pub fn construct(&'static self, args: Args) -> Result<Node, ValidationError> {
        let bound = self.bind(args)?;
        let mut slots = Vec::with_capacity(bound.len());
        for (field, arg) in self.fields().iter().zip(bound) {
            let slot = match (arg, &field.default) {
                (Some(value), _) => match validate(&value, &field.ty) {
                    Some(canonical) => Slot::Supplied(canonical),
                    None => {
                        tracing::debug!(node = self.name(), field = field.name, expected = %field.ty, found = value.kind(), "rejected argument");
                        return Err(ValidationError::TypeMismatch {
                            node: self.name(),
                            field: field.name,
                            expected: field.ty.to_string(),
                            found: value.kind(),
                        });
                    }
                },
                (None, FieldDefault::Absent) => Slot::Absent,
                (None, FieldDefault::Value(default)) => Slot::Defaulted(default.clone()),
                (None, FieldDefault::Required) => return Err(self.missing(field)),
            };
            slots.push(slot);
        }
        Ok(Node { ty: self, slots })
    }

    /// Instance with every field at its default.
    pub fn empty(&'static self) -> Result<Node, ValidationError> {
        self.construct(Args::new())
    }

    // Match arguments to fields without looking at values.
    fn bind(&self, args: Args) -> Result<Vec<Option<Value>>, ValidationError> {
        let fields = self.fields();
        if args.positional.len() > fields.len() {
            return Err(ValidationError::TooManyPositional {
                node: self.name(),
                max: fields.len(),
                given: args.positional.len(),
            });
        }

        let mut bound: Vec<Option<Value>> = vec![None; fields.len()];
        for (slot, value) in bound.iter_mut().zip(args.positional) {
            *slot = Some(value);
        }
        for (name, value) in args.keywords {
            let Some(i) = self.field_index(&name) else {
                return Err(ValidationError::UnknownField { node: self.name(), field: name });
            };
            if bound[i].is_some() {
                return Err(ValidationError::DuplicateField { node: self.name(), field: fields[i].name });
            }
            bound[i] = Some(value);
        }

        if let Some(field) = fields.iter().zip(&bound).find_map(|(f, b)| (f.is_required() && b.is_none()).then_some(f)) {
            return Err(self.missing(field));
        }
        Ok(bound)
    }

    fn missing(&self, field: &Field) -> ValidationError {
        tracing::debug!(node = self.name(), field = field.name, "missing required argument");
        ValidationError::MissingField {
            node: self.name(),
            field: field.name,
            expected: field.ty.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::FieldType;
    use once_cell::sync::Lazy;

    static LABEL: Lazy<NodeType> = Lazy::new(|| {
        NodeType::component("Label")
            .required("text", FieldType::text())
            .tag("type", "plain_text")
            .optional("emoji", FieldType::boolean())
            .coerce_text("text")
            .build()
    });

    static CHOICE: Lazy<NodeType> = Lazy::new(|| {
        NodeType::component("Choice")
            .required("text", FieldType::node(&LABEL))
            .required("value", FieldType::text())
            .optional("description", FieldType::node(&LABEL))
            .optional("url", FieldType::text())
            .build()
    });

    static PICKER: Lazy<NodeType> = Lazy::new(|| {
        NodeType::element("Picker")
            .required("action_id", FieldType::text())
            .optional("options", FieldType::list(FieldType::node(&CHOICE)))
            .optional("max_selected_items", FieldType::integer())
            .build()
    });

    static PANEL: Lazy<NodeType> = Lazy::new(|| NodeType::block("Panel").build());

    #[test]
    fn positional_and_keyword_binding() {
        let a = CHOICE.construct(Args::new().arg("Click me").arg("v1")).unwrap();
        let b = CHOICE.construct(Args::new().kw("value", "v1").kw("text", "Click me")).unwrap();
        assert_eq!(a, b);
        assert!(a.slot("value").unwrap().is_supplied());
        assert!(a.slot("url").unwrap().is_absent());
        assert_eq!(a.get("url"), None);
    }

    #[test]
    fn defaults_are_stored_not_supplied() {
        let label = LABEL.construct(Args::new().arg("hi")).unwrap();
        assert_eq!(label.slot("type"), Some(&Slot::Defaulted(Value::from("plain_text"))));
        assert_eq!(label.slot("emoji"), Some(&Slot::Absent));
    }

    #[test]
    fn missing_required_field_is_named() {
        let err = PICKER.empty().unwrap_err();
        assert_eq!(err.field(), Some("action_id"));
        assert_eq!(err.expected(), Some("str"));
        assert!(matches!(err, ValidationError::MissingField { node: "Picker", .. }));
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        let err = PICKER.construct(Args::new().arg("a").kw("colour", "red")).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { .. }));
        assert_eq!(err.field(), Some("colour"));

        // the discriminator is synthesized, never an argument
        let err = PICKER.construct(Args::new().arg("a").kw("type", "picker")).unwrap_err();
        assert_eq!(err.field(), Some("type"));
    }

    #[test]
    fn duplicate_and_excess_arguments() {
        let err = PICKER.construct(Args::new().arg("a").kw("action_id", "b")).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateField { field: "action_id", .. }));

        let err = PANEL.construct(Args::new().arg("id").arg("extra")).unwrap_err();
        assert!(matches!(err, ValidationError::TooManyPositional { max: 1, given: 2, .. }));
    }

    #[test]
    fn first_bad_field_aborts() {
        let err = PICKER
            .construct(Args::new().arg(5).kw("max_selected_items", "many"))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                node: "Picker",
                field: "action_id",
                expected: "str".into(),
                found: "int",
            }
        );
    }

    #[test]
    fn list_field_reports_whole_field() {
        let good = CHOICE.construct(Args::new().arg("a").arg("1")).unwrap();
        let err = PICKER
            .construct(Args::new().arg("pick").kw("options", vec![Value::from(good), Value::from("b")]))
            .unwrap_err();
        assert_eq!(err.field(), Some("options"));
        assert_eq!(err.expected(), Some("list<Choice>"));
    }

    #[test]
    fn identifier_is_an_ordinary_optional_field() {
        let panel = PANEL.empty().unwrap();
        assert!(panel.slot("block_id").unwrap().is_absent());
        let panel = PANEL.construct(Args::new().kw("block_id", "b1")).unwrap();
        assert_eq!(panel.get("block_id"), Some(&Value::from("b1")));
    }

    #[test]
    fn kw_opt_skips_none() {
        let p = PICKER
            .construct(Args::new().arg("a").kw_opt("max_selected_items", None::<i64>))
            .unwrap();
        assert!(p.slot("max_selected_items").unwrap().is_absent());
        let p = PICKER
            .construct(Args::new().arg("a").kw_opt("max_selected_items", Some(3)))
            .unwrap();
        assert_eq!(p.get("max_selected_items"), Some(&Value::Integer(3)));
    }
}
