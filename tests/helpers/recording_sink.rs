//! Chat sink that records everything the router delivers

use async_trait::async_trait;
use std::sync::Mutex;
use TechnikumBot::render::{ChatRef, ChatSink, MessageRef, RenderedScreen};
use TechnikumBot::utils::errors::{TechnikumBotError, Result};

/// A single delivery made through the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivered {
    Sent { chat: ChatRef, screen: RenderedScreen },
    Edited { message: MessageRef, screen: RenderedScreen },
    Acknowledged { query_id: String, alert: Option<String> },
}

impl Delivered {
    pub fn screen(&self) -> Option<&RenderedScreen> {
        match self {
            Delivered::Sent { screen, .. } | Delivered::Edited { screen, .. } => Some(screen),
            Delivered::Acknowledged { .. } => None,
        }
    }
}

#[derive(Default)]
pub struct RecordingSink {
    log: Mutex<Vec<Delivered>>,
    reject_edits: Mutex<bool>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following edit fail the way Telegram refuses stale edits
    pub fn reject_edits(&self, reject: bool) {
        *self.reject_edits.lock().unwrap() = reject;
    }

    /// Everything delivered so far
    pub fn deliveries(&self) -> Vec<Delivered> {
        self.log.lock().unwrap().clone()
    }

    /// Take and clear the delivery log
    pub fn drain(&self) -> Vec<Delivered> {
        std::mem::take(&mut *self.log.lock().unwrap())
    }

    pub fn acknowledgements(&self) -> Vec<(String, Option<String>)> {
        self.deliveries()
            .into_iter()
            .filter_map(|d| match d {
                Delivered::Acknowledged { query_id, alert } => Some((query_id, alert)),
                _ => None,
            })
            .collect()
    }

    /// Screens shown so far, sent or edited
    pub fn screens(&self) -> Vec<RenderedScreen> {
        self.deliveries().iter().filter_map(|d| d.screen().cloned()).collect()
    }

    pub fn last_screen(&self) -> Option<RenderedScreen> {
        self.screens().pop()
    }
}

#[async_trait]
impl ChatSink for RecordingSink {
    async fn send(&self, chat: ChatRef, screen: &RenderedScreen) -> Result<()> {
        self.log.lock().unwrap().push(Delivered::Sent { chat, screen: screen.clone() });
        Ok(())
    }

    async fn edit(&self, message: MessageRef, screen: &RenderedScreen) -> Result<()> {
        if *self.reject_edits.lock().unwrap() {
            return Err(TechnikumBotError::RenderConflict("Bad Request: message is not modified".to_string()));
        }

        self.log.lock().unwrap().push(Delivered::Edited { message, screen: screen.clone() });
        Ok(())
    }

    async fn acknowledge(&self, query_id: &str, alert: Option<&str>) -> Result<()> {
        self.log.lock().unwrap().push(Delivered::Acknowledged {
            query_id: query_id.to_string(),
            alert: alert.map(str::to_string),
        });
        Ok(())
    }
}
