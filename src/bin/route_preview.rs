use anyhow::{bail, Context};
use clap::Parser;
use menu_bot::adapters::graph_api::to_payload;
use menu_bot::core::InboundEvent;
use menu_bot::utils::{logger, validation::Validate};
use menu_bot::{BotConfig, ConversationRouter};

/// Prints the replies the bot would send for one simulated message, without
/// touching the network.
#[derive(Parser)]
#[command(name = "route-preview")]
#[command(about = "Dry run of the conversation flow for a single inbound message")]
struct Args {
    /// Path to TOML configuration file (built-in data when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Customer display name
    #[arg(short, long, default_value = "there")]
    name: String,

    /// Recipient id written into the payloads
    #[arg(long, default_value = "2340000000000")]
    to: String,

    /// Text message body, e.g. "hi"
    #[arg(long, conflicts_with_all = ["button", "list", "lat"])]
    text: Option<String>,

    /// Button reply id, e.g. "order_food"
    #[arg(long, conflicts_with_all = ["list", "lat"])]
    button: Option<String>,

    /// List reply id, e.g. "rest_lekki"
    #[arg(long, conflicts_with = "lat")]
    list: Option<String>,

    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn event(&self) -> anyhow::Result<InboundEvent> {
        let event = if let Some(text) = &self.text {
            if text.trim().eq_ignore_ascii_case("hi") {
                InboundEvent::Greeting
            } else {
                InboundEvent::Unrecognized
            }
        } else if let Some(id) = &self.button {
            InboundEvent::ButtonSelected(id.clone())
        } else if let Some(id) = &self.list {
            InboundEvent::ListItemSelected(id.clone())
        } else if let (Some(latitude), Some(longitude)) = (self.lat, self.lon) {
            InboundEvent::LocationShared {
                latitude,
                longitude,
            }
        } else {
            bail!("Pass one of --text, --button, --list or --lat/--lon");
        };
        Ok(event)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = BotConfig::load(args.config.as_deref()).context("loading bot configuration")?;
    config.validate().context("validating bot configuration")?;

    let event = args.event()?;
    let router = ConversationRouter::from_config(&config);
    let replies = router.route(&event, &args.name);

    println!("📨 Event: {:?}", event);
    println!("📤 {} replies", replies.len());

    for (i, reply) in replies.iter().enumerate() {
        println!();
        println!("--- reply {} ({}) ---", i + 1, reply.kind());
        println!("{}", serde_json::to_string_pretty(&to_payload(&args.to, reply))?);
    }

    Ok(())
}
