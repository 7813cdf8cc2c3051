//! Per-user dialog state

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::models::Rating;

/// Pending multi-step interaction of a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogState {
    #[default]
    Idle,
    /// A rating was chosen, the review text has not arrived yet
    AwaitingReviewText(Rating),
}

impl DialogState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DialogState::Idle)
    }

    pub fn pending_rating(&self) -> Option<Rating> {
        match self {
            DialogState::Idle => None,
            DialogState::AwaitingReviewText(rating) => Some(*rating),
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogState::Idle => write!(f, "idle"),
            DialogState::AwaitingReviewText(rating) => write!(f, "awaiting_review_text({})", rating),
        }
    }
}
