//! Field type validation.
//!
//! `validate` decides whether a value is acceptable for a declared field type
//! and returns its canonical form. Rules, in priority order:
//! 1) `list<T>`: a list whose every element validates against `T`.
//! 2) `union<..>`: first branch (in written order) that accepts the value.
//! 3) node type with custom coercion: the coercion decides.
//! 4) node type / category: an instance of that exact type, or of the category
//!    or a subtype of it. No conversion between node types.
//! 5) primitive: the runtime kind matches exactly (no widening).

use crate::ir::{FieldType, Primitive};
use crate::node::Args;
use crate::node_type::{Coercion, NodeType};
use crate::value::Value;

/// `Some(canonical)` if `value` is accepted for `ty`, `None` otherwise.
pub fn validate(value: &Value, ty: &FieldType) -> Option<Value> {
    match ty {
        FieldType::List(item) => {
            let Value::List(items) = value else { return None };
            // element-wise total: one bad element rejects the whole list
            items
                .iter()
                .map(|el| validate(el, item))
                .collect::<Option<Vec<_>>>()
                .map(Value::List)
        }
        FieldType::Union(branches) => branches.iter().find_map(|b| validate(value, b)),
        FieldType::Node(node_type) => match node_type.coercion() {
            Some(coercion) => coerce(*node_type, coercion, value),
            None => match value {
                Value::Node(node) if node.is(node_type) => Some(value.clone()),
                _ => None,
            },
        },
        FieldType::Category(category) => match value {
            Value::Node(node) if node.node_type().category().is_a(*category) => Some(value.clone()),
            _ => None,
        },
        FieldType::Primitive(p) => match (p, value) {
            (Primitive::Text, Value::Text(_))
            | (Primitive::Integer, Value::Integer(_))
            | (Primitive::Boolean, Value::Boolean(_)) => Some(value.clone()),
            _ => None,
        },
    }
}

fn coerce(node_type: &'static NodeType, coercion: Coercion, value: &Value) -> Option<Value> {
    match (coercion, value) {
        (_, Value::Node(node)) if node.is(node_type) => Some(value.clone()),
        (Coercion::WrapText { field }, Value::Text(s)) => node_type
            .construct(Args::new().kw(field, s.as_str()))
            .inspect_err(|err| tracing::debug!(node = node_type.name(), %err, "string coercion failed"))
            .ok()
            .map(Value::Node),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Category;
    use once_cell::sync::Lazy;

    static LABEL: Lazy<NodeType> = Lazy::new(|| {
        NodeType::component("Label")
            .required("text", FieldType::text())
            .tag("type", "plain_text")
            .coerce_text("text")
            .build()
    });

    static PICTURE: Lazy<NodeType> = Lazy::new(|| {
        NodeType::element("Picture").required("url", FieldType::text()).build()
    });

    static ROW: Lazy<NodeType> = Lazy::new(|| NodeType::block("Row").build());

    #[test]
    fn primitives_match_exactly() {
        assert!(validate(&Value::from("x"), &FieldType::text()).is_some());
        assert!(validate(&Value::from(1), &FieldType::integer()).is_some());
        assert!(validate(&Value::from(true), &FieldType::boolean()).is_some());

        assert!(validate(&Value::from(true), &FieldType::integer()).is_none());
        assert!(validate(&Value::from(1), &FieldType::text()).is_none());
        assert!(validate(&Value::from("1"), &FieldType::integer()).is_none());
    }

    #[test]
    fn empty_list_always_accepted() {
        let empty = Value::List(Vec::new());
        assert_eq!(validate(&empty, &FieldType::list(FieldType::integer())), Some(empty.clone()));
        assert_eq!(validate(&empty, &FieldType::list(FieldType::node(&PICTURE))), Some(empty));
    }

    #[test]
    fn list_rejects_if_any_element_fails() {
        let ty = FieldType::list(FieldType::text());
        assert!(validate(&Value::from(vec!["a", "b"]), &ty).is_some());
        let mixed = Value::List(vec![Value::from("a"), Value::from(2)]);
        assert!(validate(&mixed, &ty).is_none());
        assert!(validate(&Value::from("a"), &ty).is_none());
    }

    #[test]
    fn coercion_wraps_strings() {
        let got = validate(&Value::from("hi"), &FieldType::node(&LABEL)).unwrap();
        let node = got.as_node().unwrap();
        assert!(node.is(&LABEL));
        assert_eq!(node.get("text"), Some(&Value::from("hi")));
        assert_eq!(node.get("type"), Some(&Value::from("plain_text")));

        // an existing instance passes through unchanged
        let label = LABEL.construct(Args::new().arg("x").arg("mrkdwn")).unwrap();
        let got = validate(&Value::from(label.clone()), &FieldType::node(&LABEL)).unwrap();
        assert_eq!(got, Value::from(label));

        assert!(validate(&Value::from(3), &FieldType::node(&LABEL)).is_none());
    }

    #[test]
    fn node_types_are_not_interchangeable() {
        let pic = PICTURE.construct(Args::new().arg("https://x")).unwrap();
        assert!(validate(&Value::from(pic.clone()), &FieldType::node(&PICTURE)).is_some());
        assert!(validate(&Value::from(pic), &FieldType::node(&ROW)).is_none());
        assert!(validate(&Value::from("https://x"), &FieldType::node(&PICTURE)).is_none());
    }

    #[test]
    fn categories_accept_subtypes() {
        let row = Value::from(ROW.empty().unwrap());
        let pic = Value::from(PICTURE.construct(Args::new().arg("u")).unwrap());
        let label = Value::from(LABEL.construct(Args::new().arg("u")).unwrap());

        assert!(validate(&row, &FieldType::any(Category::Element)).is_some());
        assert!(validate(&pic, &FieldType::any(Category::Element)).is_some());
        assert!(validate(&label, &FieldType::any(Category::Element)).is_none());
        assert!(validate(&pic, &FieldType::any(Category::Block)).is_none());
        assert!(validate(&label, &FieldType::any(Category::Component)).is_some());
    }

    #[test]
    fn union_takes_first_accepting_branch() {
        // a string fits both branches; the earlier one decides
        let label_first = FieldType::union([FieldType::node(&LABEL), FieldType::text()]);
        let got = validate(&Value::from("x"), &label_first).unwrap();
        assert!(got.as_node().is_some());

        let text_first = FieldType::union([FieldType::text(), FieldType::node(&LABEL)]);
        assert_eq!(validate(&Value::from("x"), &text_first), Some(Value::from("x")));

        assert!(validate(&Value::from(false), &text_first).is_none());
    }

    #[test]
    fn list_of_union_canonicalizes_each_element() {
        let ty = FieldType::list(FieldType::union([FieldType::node(&PICTURE), FieldType::node(&LABEL)]));
        let pic = PICTURE.construct(Args::new().arg("u")).unwrap();
        let got = validate(&Value::List(vec![Value::from(pic.clone()), Value::from("caption")]), &ty).unwrap();
        let items = got.as_list().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Value::from(pic));
        assert!(items[1].as_node().is_some_and(|n| n.is(&LABEL)));
    }
}
