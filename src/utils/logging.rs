//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the TechnikumBot application.

use tracing::{info, debug, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::models::UserId;
use crate::state::DialogState;
use crate::utils::errors::{TechnikumBotError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer when dropped and must be held
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| TechnikumBotError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "technikum-bot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| TechnikumBotError::Config(format!("Failed to install subscriber: {}", e)))?;

    info!(level = %config.level, file_path = ?config.file_path, "Logging initialized");
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: UserId, action: &str, details: Option<&str>) {
    info!(
        user_id = %user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a dialog state change
pub fn log_dialog_transition(user_id: UserId, from: &DialogState, to: &DialogState) {
    if from == to {
        debug!(user_id = %user_id, state = %to, "Dialog state unchanged");
    } else {
        info!(user_id = %user_id, from = %from, to = %to, "Dialog state changed");
    }
}

/// Log a rejected in-place update
pub fn log_render_conflict(user_id: UserId, screen: &str, reason: &str) {
    debug!(
        user_id = %user_id,
        screen = screen,
        reason = reason,
        "Edit rejected by transport, acknowledging only"
    );
}

/// Log events the router drops
pub fn log_dropped_event(user_id: UserId, reason: &str, details: Option<&str>) {
    warn!(
        user_id = %user_id,
        reason = reason,
        details = details,
        "Event dropped"
    );
}
