//! Internationalization module
//!
//! This module holds the bot's texts. It provides translation loading,
//! language detection and message formatting for the supported languages.

pub mod loader;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams};
