//! Layout blocks. Every block carries an optional `block_id`.

use once_cell::sync::Lazy;

use crate::ir::{Category, FieldType};
use crate::node_type::NodeType;

use super::components::TEXT;
use super::elements::IMAGE;

/// Holds interactive elements.
pub static ACTIONS: Lazy<NodeType> = Lazy::new(|| {
    NodeType::block("Actions")
        .required("elements", FieldType::list(FieldType::any(Category::Element)))
        .build()
});

/// Message context: images and text, shown small.
pub static CONTEXT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::block("Context")
        .required(
            "elements",
            // Slack only allows image and text here; any other element is rejected
            // upstream, and a bare string must become a `Text`.
            FieldType::list(FieldType::union([FieldType::node(&IMAGE), FieldType::node(&TEXT)])),
        )
        .build()
});

pub static DIVIDER: Lazy<NodeType> = Lazy::new(|| NodeType::block("Divider").build());

/// A remote file.
pub static FILE: Lazy<NodeType> = Lazy::new(|| {
    NodeType::block("File")
        .required("external_id", FieldType::text())
        .defaulted("source", FieldType::text(), "remote")
        .build()
});

pub static HEADER: Lazy<NodeType> = Lazy::new(|| {
    NodeType::block("Header").required("text", FieldType::node(&TEXT)).build()
});

pub static IMAGE_BLOCK: Lazy<NodeType> = Lazy::new(|| {
    NodeType::block("ImageBlock")
        .discriminator("image")
        .required("image_url", FieldType::text())
        .required("alt_text", FieldType::text())
        .optional("title", FieldType::node(&TEXT))
        .build()
});

/// Collects information from users.
pub static INPUT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::block("Input")
        .required("label", FieldType::node(&TEXT))
        .required("element", FieldType::any(Category::Element))
        .optional("dispatch_action", FieldType::boolean())
        .optional("hint", FieldType::node(&TEXT))
        .optional("optional", FieldType::boolean())
        .build()
});

/// Text, optionally beside an accessory element.
pub static SECTION: Lazy<NodeType> = Lazy::new(|| {
    NodeType::block("Section")
        .optional("text", FieldType::node(&TEXT))
        .optional("fields", FieldType::list(FieldType::node(&TEXT)))
        .optional("accessory", FieldType::any(Category::Element))
        .build()
});

pub(super) fn all() -> [&'static NodeType; 8] {
    [&*ACTIONS, &*CONTEXT, &*DIVIDER, &*FILE, &*HEADER, &*IMAGE_BLOCK, &*INPUT, &*SECTION]
}
