//! State management module
//!
//! This module handles the per-user dialog state and the transition table
//! that drives it.

pub mod context;
pub mod storage;
pub mod transitions;

// Re-export commonly used state components
pub use context::DialogState;
pub use storage::DialogStateTracker;
pub use transitions::{
    transition, Delivery, DialogEvent, Effect, Notice, TransitionOptions, TransitionResult,
};
