use serde::{Deserialize, Serialize};

/// A named circular geofence with the branches that deliver inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRegion {
    pub name: String,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub radius_km: f64,
    pub branches: Vec<Branch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub header: String,
    /// Shown in front of the header; never part of item identifiers.
    #[serde(default)]
    pub icon: Option<String>,
    pub body_text: String,
    pub items: Vec<String>,
}

/// One incoming customer message reduced to what the router acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    Greeting,
    ButtonSelected(String),
    ListItemSelected(String),
    LocationShared { latitude: f64, longitude: f64 },
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    /// Sender's WhatsApp id, used as the reply recipient.
    pub from: String,
    pub customer_name: String,
    pub event: InboundEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyOption {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundReply {
    Text {
        body: String,
    },
    Buttons {
        body_text: String,
        buttons: Vec<ReplyOption>,
    },
    List {
        header_text: String,
        body_text: String,
        footer_text: String,
        button_label: String,
        section_title: String,
        rows: Vec<ReplyOption>,
    },
}

impl OutboundReply {
    pub fn kind(&self) -> &'static str {
        match self {
            OutboundReply::Text { .. } => "text",
            OutboundReply::Buttons { .. } => "buttons",
            OutboundReply::List { .. } => "list",
        }
    }
}

impl From<&Branch> for ReplyOption {
    fn from(branch: &Branch) -> Self {
        Self {
            id: branch.id.clone(),
            title: branch.title.clone(),
        }
    }
}
