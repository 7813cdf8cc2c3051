//! Help command handler

use std::sync::Arc;
use teloxide::{Bot, types::Message, prelude::*};
use crate::utils::errors::Result;
use crate::i18n::I18n;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message, i18n: Arc<I18n>) -> Result<()> {
    let lang = i18n.detect_user_language(
        msg.from.as_ref().and_then(|user| user.language_code.as_deref())
    );
    let help_text = i18n.t("commands.help", &lang, None);

    bot.send_message(msg.chat.id, help_text).await?;
    Ok(())
}
