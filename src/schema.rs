//! Built-in Block Kit declarations.
//!
//! Pure data: each static names a node type, its fields and defaults. All of
//! the behavior lives in the generic runtime.
pub mod blocks;
pub mod components;
pub mod elements;
pub mod messages;

use once_cell::sync::Lazy;

use crate::node_type::NodeType;

pub use blocks::*;
pub use components::*;
pub use elements::*;
pub use messages::*;

static ALL: Lazy<Vec<&'static NodeType>> = Lazy::new(|| {
    components::all()
        .into_iter()
        .chain(elements::all())
        .chain(blocks::all())
        .chain(messages::all())
        .collect()
});

/// Every built-in node type: components, elements, blocks, then messages.
pub fn all() -> &'static [&'static NodeType] {
    &ALL
}

pub fn lookup(name: &str) -> Option<&'static NodeType> {
    all().iter().copied().find(|ty| ty.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Category, FieldType};
    use crate::node_type::IDENTIFIER_FIELD;
    use std::collections::BTreeSet;

    #[test]
    fn names_are_unique() {
        let names: BTreeSet<_> = all().iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), all().len());
        assert_eq!(all().len(), 34);
    }

    #[test]
    fn lookup_by_name() {
        assert!(lookup("Button").is_some_and(|t| t == &*BUTTON));
        assert!(lookup("ImageBlock").is_some_and(|t| t.discriminator() == Some("image")));
        assert!(lookup("Nope").is_none());
    }

    #[test]
    fn every_block_has_identifier_last() {
        for ty in all().iter().filter(|t| t.category() == Category::Block) {
            let last = ty.fields().last().map(|f| f.name);
            assert_eq!(last, Some(IDENTIFIER_FIELD), "{}", ty.name());
        }
    }

    #[test]
    fn only_text_coerces() {
        let coercing: Vec<_> = all().iter().filter(|t| t.coercion().is_some()).map(|t| t.name()).collect();
        assert_eq!(coercing, ["Text"]);
    }

    #[test]
    fn discriminated_fields_never_shadow_type_key() {
        for ty in all().iter().filter(|t| t.discriminator().is_some()) {
            assert!(ty.field("type").is_none(), "{}", ty.name());
        }
        // declarations reference each other by identity
        let option_text = OPTION.field("text").map(|f| matches!(f.ty, FieldType::Node(t) if t == &*TEXT));
        assert_eq!(option_text, Some(true));
    }
}
