pub mod catalog;
pub mod engine;
pub mod geofence;
pub mod replies;
pub mod router;

pub use crate::domain::model::{InboundEvent, InboundMessage, OutboundReply, ServiceRegion};
pub use crate::domain::ports::ReplySender;
pub use crate::utils::error::Result;
