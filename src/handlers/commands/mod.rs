//! Command handlers module
//!
//! This module contains handlers for the bot commands: /start enters the
//! menu, /help prints a static description.

pub mod start;
pub mod help;

use std::sync::Arc;
use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::i18n::I18n;
use super::router::EventRouter;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Команды бота:")]
pub enum Command {
    #[command(description = "Открыть главное меню")]
    Start,
    #[command(description = "Показать справку")]
    Help,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    router: Arc<EventRouter>,
    i18n: Arc<I18n>,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(msg, router).await,
        Command::Help => help::handle_help(bot, msg, i18n).await,
    }
}
