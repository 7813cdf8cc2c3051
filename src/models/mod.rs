//! Data models module
//!
//! This module contains the data structures shared by the dialog engine

pub mod user;
pub mod review;

// Re-export commonly used models
pub use user::{UserId, UserSnapshot};
pub use review::{Rating, Review};
