use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "menu-bot")]
#[command(about = "WhatsApp ordering bot webhook server")]
pub struct CliConfig {
    /// TOML file with business wording, service regions and menu
    #[arg(short, long, env = "MENU_BOT_CONFIG")]
    pub config: Option<String>,

    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
