//! Technikum Telegram Bot
//!
//! Menu-driven Telegram bot for an educational institution. Visitors browse
//! informational screens, register, unlock statistics and leave a star rated
//! review. This library provides the dialog engine behind it: user store,
//! dialog state tracking, the menu graph, event routing and rendering.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod repositories;
pub mod models;
pub mod menu;
pub mod render;
pub mod state;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{TechnikumBotError, Result};

// Re-export main components for easy access
pub use handlers::EventRouter;
pub use menu::MenuGraph;
pub use services::ServiceFactory;
pub use state::{DialogState, DialogStateTracker};
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
