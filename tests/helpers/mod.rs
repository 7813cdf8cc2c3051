//! Test helpers module
//!
//! This module provides utilities for testing the Technikum bot: a recording
//! chat sink, log capture, a failing store, a mock Telegram API server and a
//! ready wired test context.

#![allow(dead_code)]

pub mod failing_store;
pub mod log_capture;
pub mod recording_sink;
pub mod telegram_mock;
pub mod test_context;

pub use failing_store::*;
pub use log_capture::*;
pub use recording_sink::*;
pub use telegram_mock::*;
pub use test_context::*;
