//! User service implementation
//!
//! This service handles user registration and review bookkeeping on top of
//! a [`UserStore`].

use std::sync::Arc;
use tracing::{info, debug};
use crate::models::{Review, UserId, UserSnapshot};
use crate::repositories::UserStore;
use crate::utils::errors::Result;

/// Result of a registration request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    AlreadyRegistered,
}

/// User service for managing user operations
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Register a user; registering twice is a no-op
    pub async fn register_user(&self, user_id: UserId) -> Result<RegistrationOutcome> {
        if self.store.register(user_id).await? {
            info!(user_id = %user_id, "User registered");
            Ok(RegistrationOutcome::Registered)
        } else {
            debug!(user_id = %user_id, "User already registered");
            Ok(RegistrationOutcome::AlreadyRegistered)
        }
    }

    pub async fn is_registered(&self, user_id: UserId) -> Result<bool> {
        self.store.is_registered(user_id).await
    }

    pub async fn get_review(&self, user_id: UserId) -> Result<Option<Review>> {
        self.store.find_review(user_id).await
    }

    /// Store a review, replacing the previous one
    pub async fn submit_review(&self, user_id: UserId, review: Review) -> Result<()> {
        let rating = review.rating;
        let replaced = self.store.save_review(user_id, review).await?;
        info!(
            user_id = %user_id,
            rating = %rating,
            replaced = replaced.is_some(),
            "Review stored"
        );
        Ok(())
    }

    /// Registration and review state used to route an event
    pub async fn snapshot(&self, user_id: UserId) -> Result<UserSnapshot> {
        Ok(UserSnapshot {
            registered: self.store.is_registered(user_id).await?,
            review: self.store.find_review(user_id).await?,
        })
    }

    pub async fn registered_count(&self) -> Result<usize> {
        self.store.registered_count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;
    use crate::repositories::MemoryUserStore;

    fn create_service() -> UserService {
        UserService::new(Arc::new(MemoryUserStore::new()))
    }

    #[tokio::test]
    async fn test_register_user_outcomes() {
        let service = create_service();
        let user = UserId(1001);

        assert_eq!(service.register_user(user).await.unwrap(), RegistrationOutcome::Registered);
        assert_eq!(service.register_user(user).await.unwrap(), RegistrationOutcome::AlreadyRegistered);
        assert_eq!(service.registered_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_snapshot() {
        let service = create_service();
        let user = UserId(1002);

        assert_eq!(service.snapshot(user).await.unwrap(), UserSnapshot::default());

        service.register_user(user).await.unwrap();
        let review = Review::new(Rating::new(3).unwrap(), "ok");
        service.submit_review(user, review.clone()).await.unwrap();

        let snapshot = service.snapshot(user).await.unwrap();
        assert!(snapshot.registered);
        assert_eq!(snapshot.review, Some(review));
    }
}
