//! Outbound delivery seam

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::utils::errors::Result;
use super::RenderedScreen;

/// Chat a message goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatRef(pub i64);

/// An already displayed message that can be edited in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRef {
    pub chat: ChatRef,
    pub message_id: i32,
}

/// Where rendered screens and acknowledgements go
#[async_trait]
pub trait ChatSink: Send + Sync {
    /// Post `screen` as a new message
    async fn send(&self, chat: ChatRef, screen: &RenderedScreen) -> Result<()>;

    /// Replace the content of `message` with `screen`.
    ///
    /// Fails with `TechnikumBotError::RenderConflict` when the transport refuses the
    /// edit, e.g. because nothing changed or the message is too old.
    async fn edit(&self, message: MessageRef, screen: &RenderedScreen) -> Result<()>;

    /// Close the pending indicator of a button press, optionally with an alert
    async fn acknowledge(&self, query_id: &str, alert: Option<&str>) -> Result<()>;
}
