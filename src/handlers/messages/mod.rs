//! Message handlers module
//!
//! Handles incoming text messages in private chats. Text either completes a
//! pending review or, outside a dialog, gets a hint.

use std::sync::Arc;
use teloxide::types::Message;
use tracing::debug;
use crate::utils::errors::Result;
use crate::handlers::router::{EventKind, EventRouter};
use crate::handlers::event_from_message;

/// Handle incoming text messages
pub async fn handle_message(msg: Message, router: Arc<EventRouter>) -> Result<()> {
    if !msg.chat.id.is_user() {
        debug!(chat_id = ?msg.chat.id, "Ignoring message outside a private chat");
        return Ok(());
    }

    let Some(text) = msg.text() else {
        debug!(chat_id = ?msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    let event = event_from_message(&msg, EventKind::Text(text.to_string()))?;
    router.handle(event).await
}
