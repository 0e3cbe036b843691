//! Inbound side of the WhatsApp Cloud API: webhook payload types and the
//! normalization from a raw payload to an [`InboundMessage`].

use crate::config::defaults::DEFAULT_CUSTOMER_NAME;
use crate::domain::model::{InboundEvent, InboundMessage};
use serde::Deserialize;

// Every field is optional: Meta also posts status callbacks and partial
// payloads to the same URL, and those must deserialize rather than fail.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookPayload {
    pub object: Option<String>,
    #[serde(default)]
    pub entry: Vec<Entry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    pub id: Option<String>,
    #[serde(default)]
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Change {
    pub field: Option<String>,
    pub value: Option<ChangeValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeValue {
    pub messaging_product: Option<String>,
    #[serde(default)]
    pub messages: Vec<WhatsAppMessage>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhatsAppMessage {
    pub from: Option<String>,
    pub id: Option<String>,
    pub timestamp: Option<String>,
    #[serde(rename = "type")]
    pub msg_type: Option<String>,
    pub text: Option<TextData>,
    pub interactive: Option<Interactive>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextData {
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Interactive {
    pub button_reply: Option<ReplyId>,
    pub list_reply: Option<ReplyId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyId {
    pub id: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    pub wa_id: Option<String>,
    pub profile: Option<Profile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
}

/// Reads the first message and contact of the first change.
///
/// Returns `None` when the payload carries no message, no contact or no
/// sender; such callbacks produce no replies.
pub fn normalize(payload: &WebhookPayload) -> Option<InboundMessage> {
    payload.object.as_ref()?;

    let value = payload.entry.first()?.changes.first()?.value.as_ref()?;
    let message = value.messages.first()?;
    let contact = value.contacts.first()?;
    let from = message.from.clone().filter(|f| !f.is_empty())?;

    let customer_name = contact
        .profile
        .as_ref()
        .and_then(|p| p.name.clone())
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CUSTOMER_NAME.to_string());

    Some(InboundMessage {
        from,
        customer_name,
        event: classify(message),
    })
}

/// Precedence when several fields are present: greeting text, button,
/// location, then list selection.
pub fn classify(message: &WhatsAppMessage) -> InboundEvent {
    let text = message
        .text
        .as_ref()
        .map(|t| t.body.to_lowercase())
        .unwrap_or_default();
    let interactive = message.interactive.as_ref();
    let button = interactive.and_then(|i| i.button_reply.as_ref());
    let list = interactive.and_then(|i| i.list_reply.as_ref());

    if text.trim() == "hi" {
        InboundEvent::Greeting
    } else if let Some(button) = button {
        InboundEvent::ButtonSelected(button.id.clone())
    } else if let Some(location) = &message.location {
        InboundEvent::LocationShared {
            latitude: location.latitude,
            longitude: location.longitude,
        }
    } else if let Some(list) = list {
        InboundEvent::ListItemSelected(list.id.clone())
    } else {
        InboundEvent::Unrecognized
    }
}
