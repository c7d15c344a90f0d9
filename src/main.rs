//! StockBot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use tracing::{info, warn, error};

use stock_bot::{
    config::Settings,
    utils::logging,
    database::{DatabaseService, DatabaseConfig, create_pool, run_migrations},
    state::AppContext,
    handlers::{Command, handle_command, handle_message},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on shutdown
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", stock_bot::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = DatabaseConfig::from(&settings.database);
    let db_pool = create_pool(&db_config).await?;

    info!("Running database migrations...");
    run_migrations(&db_pool).await?;

    let database_service = DatabaseService::new(db_pool);

    let bot = Bot::new(&settings.bot.token);
    let app_context = Arc::new(AppContext::new(settings, database_service));

    info!(
        export_path = %app_context.settings.export.file_path,
        "Setting up bot handlers..."
    );

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![app_context])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    info!("StockBot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_commands)
        )
        .branch(dptree::endpoint(handle_messages))
}

/// Handle bot commands
async fn handle_commands(bot: Bot, msg: Message, cmd: Command, ctx: Arc<AppContext>) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, ctx).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(bot: Bot, msg: Message, ctx: Arc<AppContext>) -> HandlerResult {
    if let Err(e) = handle_message(bot, msg, ctx).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}
