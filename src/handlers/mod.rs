//! Bot handlers module
//!
//! This module contains the event router and the Telegram handlers feeding it:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//! - Message handlers for free text

pub mod router;
pub mod commands;
pub mod callbacks;
pub mod messages;

pub use router::{EventKind, EventRouter, InboundEvent};
pub use commands::{Command, handle_command};
pub use callbacks::handle_callback_query;
pub use messages::handle_message;

use teloxide::types::Message;
use crate::render::ChatRef;
use crate::utils::errors::{TechnikumBotError, Result};

/// Build a router event for a message sent by a user
pub fn event_from_message(msg: &Message, kind: EventKind) -> Result<InboundEvent> {
    let user = msg.from.as_ref().ok_or_else(|| {
        TechnikumBotError::InvalidInput("No user in message".to_string())
    })?;

    Ok(InboundEvent {
        user_id: user.id.into(),
        chat: ChatRef(msg.chat.id.0),
        language: user.language_code.clone(),
        kind,
    })
}
