//! Test context setup
//!
//! Wires a real router over in-memory storage and a [`RecordingSink`].

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use TechnikumBot::config::I18nConfig;
use TechnikumBot::handlers::{EventKind, EventRouter, InboundEvent};
use TechnikumBot::i18n::I18n;
use TechnikumBot::menu::MenuGraph;
use TechnikumBot::models::UserId;
use TechnikumBot::render::{ChatRef, MessageRef};
use TechnikumBot::repositories::{MemoryUserStore, UserStore};
use TechnikumBot::services::ServiceFactory;
use TechnikumBot::state::TransitionOptions;
use TechnikumBot::utils::errors::Result;
use super::RecordingSink;

/// Message id the menu is displayed in for button presses
pub const MENU_MESSAGE_ID: i32 = 42;

/// Helper function to create test user ID
pub fn test_user_id() -> UserId {
    UserId(987654321)
}

pub struct TestContext {
    pub router: EventRouter,
    pub sink: Arc<RecordingSink>,
    pub services: ServiceFactory,
    next_query: AtomicU32,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_options(TransitionOptions::default())
    }

    pub fn with_options(options: TransitionOptions) -> Self {
        Self::build(Arc::new(MemoryUserStore::new()), options)
    }

    /// Context over a custom user store
    pub fn with_store(store: Arc<dyn UserStore>) -> Self {
        Self::build(store, TransitionOptions::default())
    }

    fn build(store: Arc<dyn UserStore>, options: TransitionOptions) -> Self {
        let i18n = Arc::new(I18n::new(&I18nConfig::default()).expect("built-in translations"));
        let sink = Arc::new(RecordingSink::new());
        let services = ServiceFactory::new(store);
        let router = EventRouter::new(
            services.clone(),
            Arc::new(MenuGraph::new()),
            i18n,
            sink.clone(),
            options,
        );

        Self {
            router,
            sink,
            services,
            next_query: AtomicU32::new(1),
        }
    }

    fn event(user: UserId, kind: EventKind) -> InboundEvent {
        InboundEvent {
            user_id: user,
            chat: ChatRef(user.0 as i64),
            language: Some("ru".to_string()),
            kind,
        }
    }

    /// Send `/start`
    pub async fn start(&self, user: UserId) -> Result<()> {
        self.router.handle(Self::event(user, EventKind::Entry)).await
    }

    /// Press a button on the displayed menu message
    pub async fn press(&self, user: UserId, data: &str) -> Result<()> {
        let message = MessageRef {
            chat: ChatRef(user.0 as i64),
            message_id: MENU_MESSAGE_ID,
        };
        self.press_on(user, data, Some(message)).await
    }

    /// Press a button on an arbitrary message, `None` if it can't be edited
    pub async fn press_on(&self, user: UserId, data: &str, message: Option<MessageRef>) -> Result<()> {
        let query_id = format!("query-{}", self.next_query.fetch_add(1, Ordering::SeqCst));
        let kind = EventKind::Selection {
            query_id,
            data: data.to_string(),
            message,
        };
        self.router.handle(Self::event(user, kind)).await
    }

    /// Send a free text message
    pub async fn text(&self, user: UserId, text: &str) -> Result<()> {
        self.router.handle(Self::event(user, EventKind::Text(text.to_string()))).await
    }
}
