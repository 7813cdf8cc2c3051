//! Callback query handlers module
//!
//! Converts inline keyboard presses into selection events for the router.

use std::sync::Arc;
use teloxide::types::{CallbackQuery, MaybeInaccessibleMessage};
use tracing::debug;
use crate::utils::errors::Result;
use crate::render::{ChatRef, MessageRef};
use crate::handlers::router::{EventKind, EventRouter, InboundEvent};

/// Build the router event for a callback query
pub fn event_from_callback(query: CallbackQuery) -> InboundEvent {
    let user = query.from;

    let message = match &query.message {
        Some(MaybeInaccessibleMessage::Regular(message)) => Some(MessageRef {
            chat: ChatRef(message.chat.id.0),
            message_id: message.id.0,
        }),
        // Too old to be edited, the reply goes out as a new message
        _ => None,
    };

    let chat = query
        .message
        .as_ref()
        .map(|m| ChatRef(m.chat().id.0))
        .unwrap_or(ChatRef(user.id.0 as i64));

    InboundEvent {
        user_id: user.id.into(),
        chat,
        language: user.language_code,
        kind: EventKind::Selection {
            query_id: query.id.to_string(),
            data: query.data.unwrap_or_default(),
            message,
        },
    }
}

/// Main callback query dispatcher
pub async fn handle_callback_query(query: CallbackQuery, router: Arc<EventRouter>) -> Result<()> {
    let event = event_from_callback(query);

    if let EventKind::Selection { data, .. } = &event.kind {
        debug!(user_id = %event.user_id, callback_data = %data, "Processing callback query");
    }

    router.handle(event).await
}
