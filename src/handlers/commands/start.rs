//! Start command handler
//!
//! /start is the entry event of the dialog engine: it resets any pending
//! dialog and shows the main menu in a new message.

use std::sync::Arc;
use teloxide::types::Message;
use tracing::debug;
use crate::utils::errors::Result;
use crate::handlers::router::{EventKind, EventRouter};
use crate::handlers::event_from_message;

/// Handle /start command
pub async fn handle_start(msg: Message, router: Arc<EventRouter>) -> Result<()> {
    let event = event_from_message(&msg, EventKind::Entry)?;

    debug!(user_id = %event.user_id, chat_id = event.chat.0, "Processing /start command");

    router.handle(event).await
}
