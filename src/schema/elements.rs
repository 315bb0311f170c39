//! Interactive and display elements placed inside blocks.

use once_cell::sync::Lazy;

use crate::ir::FieldType;
use crate::node_type::NodeType;

use super::components::{CONFIRM, CONVERSATION_FILTER, DISPATCH_ACTION_CONF, OPTION, OPTION_GROUP, TEXT};

fn text() -> FieldType { FieldType::node(&TEXT) }
fn options() -> FieldType { FieldType::list(FieldType::node(&OPTION)) }
fn strings() -> FieldType { FieldType::list(FieldType::text()) }

pub static BUTTON: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("Button")
        .required("text", text())
        .required("action_id", FieldType::text())
        .optional("url", FieldType::text())
        .optional("value", FieldType::text())
        .optional("style", FieldType::text())
        .optional("confirm", FieldType::node(&CONFIRM))
        .build()
});

pub static CHECKBOXES: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("Checkboxes")
        .required("action_id", FieldType::text())
        .required("options", options())
        .optional("initial_options", options())
        .optional("confirm", FieldType::node(&CONFIRM))
        .build()
});

pub static DATE_PICKER: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("DatePicker")
        .required("action_id", FieldType::text())
        .required("placeholder", text())
        .optional("initial_date", FieldType::text())
        .optional("confirm", FieldType::node(&CONFIRM))
        .build()
});

/// Image element, for use inside other blocks. See also `IMAGE_BLOCK`.
pub static IMAGE: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("Image")
        .required("image_url", FieldType::text())
        .required("alt_text", FieldType::text())
        .build()
});

pub static MULTI_STATIC_SELECT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("MultiStaticSelect")
        .discriminator("multi_static_select")
        .required("placeholder", text())
        .required("action_id", FieldType::text())
        .optional("options", options())
        .optional("option_groups", FieldType::list(FieldType::node(&OPTION_GROUP)))
        .optional("initial_options", options())
        .optional("confirm", FieldType::node(&CONFIRM))
        .optional("max_selected_items", FieldType::integer())
        .build()
});

pub static MULTI_EXTERNAL_SELECT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("MultiExternalSelect")
        .discriminator("multi_external_select")
        .required("placeholder", text())
        .required("action_id", FieldType::text())
        .optional("min_query_length", FieldType::integer())
        .optional("initial_options", options())
        .optional("confirm", FieldType::node(&CONFIRM))
        .optional("max_selected_items", FieldType::integer())
        .build()
});

pub static MULTI_USERS_SELECT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("MultiUsersSelect")
        .discriminator("multi_users_select")
        .required("placeholder", text())
        .required("action_id", FieldType::text())
        .optional("initial_users", strings())
        .optional("confirm", FieldType::node(&CONFIRM))
        .optional("max_selected_items", FieldType::integer())
        .build()
});

pub static MULTI_CONVERSATIONS_SELECT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("MultiConversationsSelect")
        .discriminator("multi_conversations_select")
        .required("placeholder", text())
        .required("action_id", FieldType::text())
        .optional("initial_conversations", strings())
        .optional("default_to_current_conversation", FieldType::boolean())
        .optional("confirm", FieldType::node(&CONFIRM))
        .optional("max_selected_items", FieldType::integer())
        .optional("filter", FieldType::node(&CONVERSATION_FILTER))
        .build()
});

pub static MULTI_CHANNELS_SELECT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("MultiChannelsSelect")
        .discriminator("multi_channels_select")
        .required("placeholder", text())
        .required("action_id", FieldType::text())
        // a preselection is not needed to render a usable menu
        .optional("initial_channels", strings())
        .optional("confirm", FieldType::node(&CONFIRM))
        .optional("max_selected_items", FieldType::integer())
        .build()
});

/// Popup menu presented off to the side of a block.
pub static OVERFLOW: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("Overflow")
        .required("action_id", FieldType::text())
        .required("options", options())
        .optional("confirm", FieldType::node(&CONFIRM))
        .build()
});

pub static PLAIN_TEXT_INPUT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("PlainTextInput")
        .discriminator("plain_text_input")
        .required("action_id", FieldType::text())
        .required("placeholder", text())
        .optional("initial_value", FieldType::text())
        .optional("multiline", FieldType::boolean())
        .optional("min_length", FieldType::integer())
        .optional("max_length", FieldType::integer())
        .optional("dispatch_action_config", FieldType::node(&DISPATCH_ACTION_CONF))
        .build()
});

pub static RADIO_BUTTONS: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("RadioButtons")
        .discriminator("radio_buttons")
        .required("action_id", FieldType::text())
        .required("options", options())
        .optional("initial_option", FieldType::node(&OPTION))
        .optional("confirm", FieldType::node(&CONFIRM))
        .build()
});

pub static STATIC_SELECT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("StaticSelect")
        .discriminator("static_select")
        .required("placeholder", text())
        .required("action_id", FieldType::text())
        .optional("options", options())
        .optional("option_groups", FieldType::list(FieldType::node(&OPTION_GROUP)))
        .optional("initial_option", FieldType::node(&OPTION))
        .optional("confirm", FieldType::node(&CONFIRM))
        .build()
});

pub static EXTERNAL_SELECT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("ExternalSelect")
        .discriminator("external_select")
        .required("placeholder", text())
        .required("action_id", FieldType::text())
        .optional("initial_option", FieldType::node(&OPTION))
        .optional("min_query_length", FieldType::integer())
        .optional("confirm", FieldType::node(&CONFIRM))
        .build()
});

pub static USERS_SELECT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("UsersSelect")
        .discriminator("users_select")
        .required("placeholder", text())
        .required("action_id", FieldType::text())
        .optional("initial_user", FieldType::text())
        .optional("confirm", FieldType::node(&CONFIRM))
        .build()
});

pub static CONVERSATIONS_SELECT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("ConversationsSelect")
        .discriminator("conversations_select")
        .required("placeholder", text())
        .required("action_id", FieldType::text())
        .optional("initial_conversation", FieldType::text())
        .optional("default_to_current_conversation", FieldType::boolean())
        .optional("confirm", FieldType::node(&CONFIRM))
        .optional("response_url_enabled", FieldType::boolean())
        .optional("filter", FieldType::node(&CONVERSATION_FILTER))
        .build()
});

pub static CHANNELS_SELECT: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("ChannelsSelect")
        .discriminator("channels_select")
        .required("placeholder", text())
        .required("action_id", FieldType::text())
        // a preselection is not needed to render a usable menu
        .optional("initial_channel", FieldType::text())
        .optional("confirm", FieldType::node(&CONFIRM))
        .optional("response_url_enabled", FieldType::boolean())
        .build()
});

pub static TIME_PICKER: Lazy<NodeType> = Lazy::new(|| {
    NodeType::element("TimePicker")
        .required("placeholder", text())
        .required("action_id", FieldType::text())
        .optional("initial_time", FieldType::text())
        .optional("confirm", FieldType::node(&CONFIRM))
        .build()
});

pub(super) fn all() -> [&'static NodeType; 18] {
    [
        &*BUTTON,
        &*CHECKBOXES,
        &*DATE_PICKER,
        &*IMAGE,
        &*MULTI_STATIC_SELECT,
        &*MULTI_EXTERNAL_SELECT,
        &*MULTI_USERS_SELECT,
        &*MULTI_CONVERSATIONS_SELECT,
        &*MULTI_CHANNELS_SELECT,
        &*OVERFLOW,
        &*PLAIN_TEXT_INPUT,
        &*RADIO_BUTTONS,
        &*STATIC_SELECT,
        &*EXTERNAL_SELECT,
        &*USERS_SELECT,
        &*CONVERSATIONS_SELECT,
        &*CHANNELS_SELECT,
        &*TIME_PICKER,
    ]
}
