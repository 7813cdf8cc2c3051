//! Dialog state tracker
//!
//! Holds the pending review dialog of every user in memory. Absence of an
//! entry means the user is idle. Completed reviews are handed to the
//! [`UserService`].

use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use crate::models::{Rating, Review, UserId};
use crate::services::UserService;
use crate::utils::errors::{TechnikumBotError, Result};
use super::context::DialogState;

pub struct DialogStateTracker {
    states: RwLock<HashMap<UserId, Rating>>,
    users: UserService,
}

impl DialogStateTracker {
    pub fn new(users: UserService) -> Self {
        Self {
            states: RwLock::new(HashMap::new()),
            users,
        }
    }

    /// Start waiting for review text, replacing any pending rating
    pub async fn begin_review(&self, user_id: UserId, rating: Rating) {
        let previous = self.states.write().await.insert(user_id, rating);
        debug!(user_id = %user_id, rating = %rating, replaced = ?previous, "Review dialog started");
    }

    /// Finish the pending review with `text` and store it
    pub async fn complete_review(&self, user_id: UserId, text: &str) -> Result<Review> {
        let rating = self.states
            .read()
            .await
            .get(&user_id)
            .copied()
            .ok_or(TechnikumBotError::NoPendingReview { user_id })?;

        let review = Review::new(rating, text);
        self.users.submit_review(user_id, review.clone()).await?;
        // Cleared only once the review is stored
        self.states.write().await.remove(&user_id);

        Ok(review)
    }

    /// Drop any pending review, returning its rating
    pub async fn cancel_review(&self, user_id: UserId) -> Option<Rating> {
        let abandoned = self.states.write().await.remove(&user_id);
        if let Some(rating) = abandoned {
            debug!(user_id = %user_id, rating = %rating, "Pending review abandoned");
        }
        abandoned
    }

    pub async fn current_state(&self, user_id: UserId) -> DialogState {
        match self.states.read().await.get(&user_id) {
            Some(rating) => DialogState::AwaitingReviewText(*rating),
            None => DialogState::Idle,
        }
    }

    /// Number of users with a pending dialog
    pub async fn pending_count(&self) -> usize {
        self.states.read().await.len()
    }
}
