//! Outbound side: encodes replies as Cloud API message objects and posts
//! them to the phone number's `/messages` endpoint.

use crate::config::whatsapp::WhatsAppConfig;
use crate::domain::model::OutboundReply;
use crate::domain::ports::ReplySender;
use crate::utils::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

/// Builds the request body for one reply addressed to `to`.
pub fn to_payload(to: &str, reply: &OutboundReply) -> Value {
    match reply {
        OutboundReply::Text { body } => json!({
            "messaging_product": "whatsapp",
            "to": to,
            "type": "text",
            "text": { "body": body }
        }),
        OutboundReply::Buttons { body_text, buttons } => json!({
            "messaging_product": "whatsapp",
            "to": to,
            "type": "interactive",
            "interactive": {
                "type": "button",
                "body": { "text": body_text },
                "action": {
                    "buttons": buttons
                        .iter()
                        .map(|b| json!({ "type": "reply", "reply": { "id": b.id, "title": b.title } }))
                        .collect::<Vec<_>>()
                }
            }
        }),
        OutboundReply::List {
            header_text,
            body_text,
            footer_text,
            button_label,
            section_title,
            rows,
        } => json!({
            "messaging_product": "whatsapp",
            "to": to,
            "type": "interactive",
            "interactive": {
                "type": "list",
                "header": { "type": "text", "text": header_text },
                "body": { "text": body_text },
                "footer": { "text": footer_text },
                "action": {
                    "button": button_label,
                    "sections": [{ "title": section_title, "rows": rows }]
                }
            }
        }),
    }
}

pub struct GraphApiClient {
    client: Client,
    messages_url: String,
    access_token: String,
}

impl GraphApiClient {
    pub fn new(config: &WhatsAppConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &WhatsAppConfig) -> Self {
        Self {
            client,
            messages_url: config.messages_url(),
            access_token: config.access_token.clone(),
        }
    }
}

#[async_trait]
impl ReplySender for GraphApiClient {
    async fn send(&self, to: &str, reply: &OutboundReply) -> Result<()> {
        let body = to_payload(to, reply);

        tracing::debug!("Sending {} reply to {} via {}", reply.kind(), to, self.messages_url);
        let response = self
            .client
            .post(&self.messages_url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Graph API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::TransportError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
