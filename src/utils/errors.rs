//! Error handling for TechnikumBot
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;
use crate::models::UserId;

/// Main error type for TechnikumBot application
#[derive(Error, Debug)]
pub enum TechnikumBotError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Unknown action: {0}")]
    Routing(String),

    #[error("Render conflict: {0}")]
    RenderConflict(String),

    #[error("Precondition not met: {0}")]
    PreconditionNotMet(String),

    #[error("No pending review for user {user_id}")]
    NoPendingReview { user_id: UserId },

    #[error("Invalid rating: {0} (expected 1..=5)")]
    InvalidRating(u8),

    #[error("Menu graph inconsistency: {0}")]
    GraphInconsistency(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for TechnikumBot operations
pub type Result<T> = std::result::Result<T, TechnikumBotError>;

impl TechnikumBotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            TechnikumBotError::Telegram(_) => true,
            TechnikumBotError::Config(_) => false,
            TechnikumBotError::ConfigLoad(_) => false,
            TechnikumBotError::Routing(_) => true,
            TechnikumBotError::RenderConflict(_) => true,
            TechnikumBotError::PreconditionNotMet(_) => true,
            TechnikumBotError::NoPendingReview { .. } => true,
            TechnikumBotError::InvalidRating(_) => true,
            TechnikumBotError::GraphInconsistency(_) => false,
            TechnikumBotError::Serialization(_) => false,
            TechnikumBotError::Io(_) => true,
            TechnikumBotError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TechnikumBotError::Config(_) => ErrorSeverity::Critical,
            TechnikumBotError::ConfigLoad(_) => ErrorSeverity::Critical,
            TechnikumBotError::GraphInconsistency(_) => ErrorSeverity::Critical,
            TechnikumBotError::RenderConflict(_) => ErrorSeverity::Info,
            TechnikumBotError::PreconditionNotMet(_) => ErrorSeverity::Info,
            TechnikumBotError::Routing(_) => ErrorSeverity::Warning,
            TechnikumBotError::NoPendingReview { .. } => ErrorSeverity::Warning,
            TechnikumBotError::InvalidRating(_) => ErrorSeverity::Warning,
            TechnikumBotError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
