use crate::adapters::whatsapp::{normalize, WebhookPayload};
use crate::core::router::ConversationRouter;
use crate::domain::model::InboundMessage;
use crate::domain::ports::ReplySender;
use crate::utils::error::Result;

/// Normalizes a webhook payload, routes it and delivers the replies.
pub struct ReplyEngine<S: ReplySender> {
    router: ConversationRouter,
    sender: S,
}

impl<S: ReplySender> ReplyEngine<S> {
    pub fn new(router: ConversationRouter, sender: S) -> Self {
        Self { router, sender }
    }

    pub fn router(&self) -> &ConversationRouter {
        &self.router
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Returns how many replies were delivered. Payloads without a usable
    /// message deliver nothing and are not an error.
    pub async fn handle_payload(&self, payload: &WebhookPayload) -> Result<usize> {
        match normalize(payload) {
            Some(message) => self.handle_message(&message).await,
            None => {
                tracing::debug!("Payload has no customer message, nothing to reply");
                Ok(0)
            }
        }
    }

    /// Sends replies one by one in routing order and stops at the first
    /// failure, so a later reply is never seen before an earlier one.
    pub async fn handle_message(&self, message: &InboundMessage) -> Result<usize> {
        let replies = self.router.route(&message.event, &message.customer_name);

        tracing::info!(
            from = %message.from,
            event = ?message.event,
            replies = replies.len(),
            "Routing inbound message"
        );

        for (index, reply) in replies.iter().enumerate() {
            if let Err(e) = self.sender.send(&message.from, reply).await {
                tracing::error!(
                    "❌ Failed to deliver reply {}/{} ({}) to {}: {}",
                    index + 1,
                    replies.len(),
                    reply.kind(),
                    message.from,
                    e
                );
                return Err(e);
            }
        }

        Ok(replies.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::BotConfig;
    use crate::domain::model::{InboundEvent, OutboundReply};
    use crate::utils::error::BotError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockSender {
        sent: Arc<Mutex<Vec<(String, OutboundReply)>>>,
        fail_on: Option<usize>,
    }

    #[async_trait]
    impl ReplySender for MockSender {
        async fn send(&self, to: &str, reply: &OutboundReply) -> Result<()> {
            let mut sent = self.sent.lock().await;
            if self.fail_on == Some(sent.len()) {
                return Err(BotError::TransportError {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            sent.push((to.to_string(), reply.clone()));
            Ok(())
        }
    }

    fn message(event: InboundEvent) -> InboundMessage {
        InboundMessage {
            from: "2348000000000".to_string(),
            customer_name: "Ada".to_string(),
            event,
        }
    }

    fn engine(sender: MockSender) -> ReplyEngine<MockSender> {
        ReplyEngine::new(ConversationRouter::from_config(&BotConfig::default()), sender)
    }

    #[tokio::test]
    async fn test_restaurant_selection_sends_in_order() {
        let sender = MockSender::default();
        let engine = engine(sender.clone());

        let count = engine
            .handle_message(&message(InboundEvent::ListItemSelected("rest_vi".into())))
            .await
            .unwrap();

        assert_eq!(count, 7);
        let sent = sender.sent.lock().await;
        assert_eq!(sent.len(), 7);
        assert!(sent.iter().all(|(to, _)| to == "2348000000000"));
        assert!(matches!(sent[0].1, OutboundReply::Text { .. }));
        assert!(sent[1..]
            .iter()
            .all(|(_, r)| matches!(r, OutboundReply::List { .. })));
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let sender = MockSender {
            fail_on: Some(1),
            ..Default::default()
        };
        let engine = engine(sender.clone());

        let result = engine
            .handle_message(&message(InboundEvent::ListItemSelected("rest_vi".into())))
            .await;

        assert!(matches!(result, Err(BotError::TransportError { .. })));
        // only the confirmation went out
        assert_eq!(sender.sent.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_payload_sends_nothing() {
        let sender = MockSender::default();
        let engine = engine(sender.clone());

        let count = engine
            .handle_payload(&WebhookPayload::default())
            .await
            .unwrap();

        assert_eq!(count, 0);
        assert!(sender.sent.lock().await.is_empty());
    }
}
