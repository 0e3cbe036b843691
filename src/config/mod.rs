#[cfg(feature = "cli")]
pub mod cli;
pub mod defaults;
pub mod toml_config;
pub mod whatsapp;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::{BotConfig, BusinessConfig};
pub use whatsapp::WhatsAppConfig;
