pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::graph_api::GraphApiClient;
pub use config::{BotConfig, WhatsAppConfig};
pub use core::{engine::ReplyEngine, router::ConversationRouter};
pub use utils::error::{BotError, Result};
