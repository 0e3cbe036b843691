use clap::Parser;
use menu_bot::adapters::http::{self, AppState};
use menu_bot::utils::error::{BotError, ErrorSeverity};
use menu_bot::utils::{logger, validation::Validate};
use menu_bot::{BotConfig, CliConfig, ConversationRouter, GraphApiClient, ReplyEngine, WhatsAppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting menu-bot webhook");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let (bot_config, whatsapp) = match load_and_validate(&config) {
        Ok(loaded) => loaded,
        Err(e) => exit_with(e),
    };

    tracing::info!(
        "✅ Loaded {} service regions and {} menu categories",
        bot_config.regions.len(),
        bot_config.catalog.categories.len()
    );

    let sender = match GraphApiClient::new(&whatsapp) {
        Ok(sender) => sender,
        Err(e) => exit_with(e),
    };
    let router = ConversationRouter::from_config(&bot_config);
    let engine = ReplyEngine::new(router, sender);
    let state = AppState::new(engine, whatsapp.verify_token.clone());

    if let Err(e) = http::serve(&config.bind_address(), state).await {
        exit_with(BotError::IoError(e));
    }

    Ok(())
}

fn load_and_validate(config: &CliConfig) -> menu_bot::Result<(BotConfig, WhatsAppConfig)> {
    let bot_config = BotConfig::load(config.config.as_deref())?;
    bot_config.validate()?;

    let whatsapp = WhatsAppConfig::from_env()?;
    whatsapp.validate()?;
    tracing::debug!("WhatsApp config: {:?}", whatsapp);

    Ok((bot_config, whatsapp))
}

fn exit_with(e: BotError) -> ! {
    tracing::error!(
        "❌ menu-bot failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
