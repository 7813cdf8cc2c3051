//! User model

use std::fmt;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a chat participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<teloxide::types::UserId> for UserId {
    fn from(id: teloxide::types::UserId) -> Self {
        Self(id.0)
    }
}

/// Registration and review data known about a user at the time an event is routed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSnapshot {
    pub registered: bool,
    pub review: Option<super::Review>,
}

impl UserSnapshot {
    pub fn has_review(&self) -> bool {
        self.review.is_some()
    }
}
