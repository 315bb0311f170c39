//! Top-level message payloads.

use once_cell::sync::Lazy;

use crate::ir::{Category, FieldType};
use crate::node_type::NodeType;

fn blocks() -> FieldType {
    FieldType::list(FieldType::any(Category::Block))
}

pub static ATTACHMENT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::component("Attachment")
        .optional("blocks", blocks())
        .optional("color", FieldType::text())
        .build()
});

/// A message as posted through the messaging API.
pub static MESSAGE: Lazy<NodeType> = Lazy::new(|| {
    NodeType::component("Message")
        .required("channel", FieldType::text())
        .optional("blocks", blocks())
        .optional("text", FieldType::text())
        .optional("attachments", FieldType::list(FieldType::node(&ATTACHMENT)))
        .optional("thread_ts", FieldType::text())
        .optional("mrkdwn", FieldType::boolean())
        .optional("draft_id", FieldType::text())
        .optional("icon_emoji", FieldType::text())
        .optional("icon_url", FieldType::text())
        .optional("link_names", FieldType::boolean())
        .optional("parse", FieldType::text())
        .optional("reply_broadcast", FieldType::boolean())
        .optional("unfurl_links", FieldType::boolean())
        .optional("unfurl_media", FieldType::boolean())
        .optional("as_user", FieldType::boolean())
        .optional("username", FieldType::text())
        .build()
});

pub(super) fn all() -> [&'static NodeType; 2] {
    [&*ATTACHMENT, &*MESSAGE]
}
