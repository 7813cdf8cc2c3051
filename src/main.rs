//! Technikum Telegram Bot
//!
//! Main application entry point

use std::path::Path;
use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn, error};

use TechnikumBot::{
    config::Settings,
    utils::logging,
    services::ServiceFactory,
    state::TransitionOptions,
    menu::{MenuGraph, ScreenId},
    render::TelegramSink,
    i18n::I18n,
    handlers::{
        Command, EventRouter,
        handle_command, handle_callback_query, handle_message,
    },
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging, the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", TechnikumBot::info());

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::new(&settings.i18n)?;
    if let Some(dir) = &settings.i18n.translations_dir {
        i18n.load_overrides(Path::new(dir)).await?;
    }

    // The menu is static, a broken graph must never reach users
    let graph = MenuGraph::new();
    graph.validate(&i18n)?;
    info!(screens = ScreenId::ALL.len(), "Menu graph validated");

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::in_memory();
    let i18n_arc = Arc::new(i18n);
    let options = TransitionOptions {
        idle_text_hint: settings.features.idle_text_hint,
    };
    let router = EventRouter::new(
        services,
        Arc::new(graph),
        i18n_arc.clone(),
        Arc::new(TelegramSink::new(bot.clone())),
        options,
    );
    let router_arc = Arc::new(router);

    // Create the handler
    let handler = create_handler();

    // Updates of one user are processed strictly in order, users run in parallel
    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![router_arc, i18n_arc])
        .distribution_function(|upd: &Update| upd.from().map(|user| user.id))
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.kind);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");

    dispatcher.dispatch().await;

    info!("Technikum bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry()
        .branch(Update::filter_message()
            .branch(
                // Handle commands
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(handle_commands)
            )
            .branch(
                // Handle regular messages
                dptree::endpoint(handle_messages)
            )
        )
        .branch(
            // Handle callback queries
            Update::filter_callback_query()
                .endpoint(handle_callbacks)
        )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    router: Arc<EventRouter>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    report(handle_command(bot, msg, cmd, router, i18n).await, "command")
}

/// Handle regular messages
async fn handle_messages(msg: Message, router: Arc<EventRouter>) -> HandlerResult {
    report(handle_message(msg, router).await, "message")
}

/// Handle callback queries
async fn handle_callbacks(query: CallbackQuery, router: Arc<EventRouter>) -> HandlerResult {
    report(handle_callback_query(query, router).await, "callback query")
}

/// Log a handler failure; only unrecoverable errors reach the dispatcher
fn report(result: TechnikumBot::Result<()>, update: &str) -> HandlerResult {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_recoverable() => {
            warn!(error = %e, severity = %e.severity(), "Error handling {}", update);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, severity = %e.severity(), "Error handling {}", update);
            Err(e.into())
        }
    }
}
