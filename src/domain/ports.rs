use crate::domain::model::OutboundReply;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Delivers one reply to one recipient. Implementations own serialization
/// and surface failures as errors; nothing here retries.
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn send(&self, to: &str, reply: &OutboundReply) -> Result<()>;
}
