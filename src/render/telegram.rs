//! Telegram delivery
//!
//! [`ChatSink`] implementation on top of the teloxide Bot API client.

use async_trait::async_trait;
use teloxide::{
    ApiError, Bot, RequestError,
    prelude::Request,
    requests::Requester,
    payloads::{AnswerCallbackQuerySetters, EditMessageTextSetters, SendMessageSetters},
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode},
};
use tracing::{debug, error};
use crate::utils::errors::{TechnikumBotError, Result};
use super::{ChatRef, ChatSink, MessageRef, RenderedScreen};

#[derive(Clone)]
pub struct TelegramSink {
    bot: Bot,
}

impl TelegramSink {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn keyboard(screen: &RenderedScreen) -> Option<InlineKeyboardMarkup> {
        if !screen.has_buttons() {
            return None;
        }

        Some(InlineKeyboardMarkup::new(screen.rows.iter().map(|row| {
            row.iter()
                .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.callback_data.clone()))
                .collect::<Vec<_>>()
        })))
    }
}

/// Refusals that only concern the message being edited
fn is_edit_conflict(error: &ApiError) -> bool {
    matches!(
        error,
        ApiError::MessageNotModified | ApiError::MessageCantBeEdited | ApiError::MessageToEditNotFound
    )
}

#[async_trait]
impl ChatSink for TelegramSink {
    async fn send(&self, chat: ChatRef, screen: &RenderedScreen) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.0), screen.text.clone());

        if screen.html {
            request = request.parse_mode(ParseMode::Html);
        }
        if let Some(markup) = Self::keyboard(screen) {
            request = request.reply_markup(markup);
        }

        match request.send().await {
            Ok(message) => {
                debug!(chat_id = chat.0, message_id = message.id.0, screen = %screen.screen, "Message sent");
                Ok(())
            }
            Err(e) => {
                error!(chat_id = chat.0, screen = %screen.screen, error = %e, "Failed to send message");
                Err(TechnikumBotError::Telegram(e))
            }
        }
    }

    async fn edit(&self, message: MessageRef, screen: &RenderedScreen) -> Result<()> {
        let mut request = self.bot.edit_message_text(
            ChatId(message.chat.0),
            MessageId(message.message_id),
            screen.text.clone(),
        );

        if screen.html {
            request = request.parse_mode(ParseMode::Html);
        }
        if let Some(markup) = Self::keyboard(screen) {
            request = request.reply_markup(markup);
        }

        match request.send().await {
            Ok(_) => {
                debug!(chat_id = message.chat.0, message_id = message.message_id, screen = %screen.screen, "Message edited");
                Ok(())
            }
            Err(RequestError::Api(api_error)) if is_edit_conflict(&api_error) => {
                Err(TechnikumBotError::RenderConflict(api_error.to_string()))
            }
            Err(e) => Err(TechnikumBotError::Telegram(e)),
        }
    }

    async fn acknowledge(&self, query_id: &str, alert: Option<&str>) -> Result<()> {
        let mut request = self.bot.answer_callback_query(query_id.to_owned());

        if let Some(text) = alert {
            request = request.text(text.to_owned()).show_alert(true);
        }

        request.send().await?;
        Ok(())
    }
}
