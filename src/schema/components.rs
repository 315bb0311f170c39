//! Composition objects used inside elements and blocks.

use once_cell::sync::Lazy;

use crate::ir::FieldType;
use crate::node_type::NodeType;

/// `Text` tag value for plain text.
pub const PLAIN_TEXT: &str = "plain_text";
/// `Text` tag value for markdown.
pub const MARKDOWN: &str = "mrkdwn";

/// Plain or markdown text. A bare string is accepted wherever a `Text` is
/// expected and becomes `Text(string)`.
pub static TEXT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::component("Text")
        .required("text", FieldType::text())
        .tag("type", PLAIN_TEXT)
        .optional("emoji", FieldType::boolean())
        .optional("verbatim", FieldType::boolean())
        .coerce_text("text")
        .build()
});

/// Confirmation dialog shown before an interactive element fires.
pub static CONFIRM: Lazy<NodeType> = Lazy::new(|| {
    NodeType::component("Confirm")
        .required("title", FieldType::node(&TEXT))
        .required("text", FieldType::node(&TEXT))
        .required("confirm", FieldType::node(&TEXT))
        .required("deny", FieldType::node(&TEXT))
        .optional("style", FieldType::text())
        .build()
});

/// A single selectable item in a menu.
pub static OPTION: Lazy<NodeType> = Lazy::new(|| {
    NodeType::component("Option")
        .required("text", FieldType::node(&TEXT))
        .required("value", FieldType::text())
        .optional("description", FieldType::node(&TEXT))
        .optional("url", FieldType::text())
        .build()
});

pub static OPTION_GROUP: Lazy<NodeType> = Lazy::new(|| {
    NodeType::component("OptionGroup")
        .required("label", FieldType::node(&TEXT))
        .required("options", FieldType::list(FieldType::node(&OPTION)))
        .build()
});

/// When a plain-text input dispatches a `block_actions` payload.
pub static DISPATCH_ACTION_CONF: Lazy<NodeType> = Lazy::new(|| {
    NodeType::component("DispatchActionConf")
        .required("trigger_actions_on", FieldType::list(FieldType::text()))
        .build()
});

pub static CONVERSATION_FILTER: Lazy<NodeType> = Lazy::new(|| {
    NodeType::component("ConversationFilter")
        .required("include", FieldType::list(FieldType::text()))
        .optional("exclude_external_shared_channels", FieldType::boolean())
        .optional("exclude_bot_users", FieldType::boolean())
        .build()
});

pub(super) fn all() -> [&'static NodeType; 6] {
    [&*TEXT, &*CONFIRM, &*OPTION, &*OPTION_GROUP, &*DISPATCH_ACTION_CONF, &*CONVERSATION_FILTER]
}
