//! User repository implementation
//!
//! Registered users and their latest reviews. The in-memory store keeps
//! everything for the process lifetime; nothing survives a restart.

use std::collections::{HashMap, HashSet};
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::models::{Review, UserId};
use crate::utils::errors::Result;

/// Storage of registration and review data
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Add `user_id` to the registered set; returns `false` if already present
    async fn register(&self, user_id: UserId) -> Result<bool>;

    async fn is_registered(&self, user_id: UserId) -> Result<bool>;

    async fn find_review(&self, user_id: UserId) -> Result<Option<Review>>;

    /// Store `review`, replacing any previous review of `user_id`
    async fn save_review(&self, user_id: UserId, review: Review) -> Result<Option<Review>>;

    async fn registered_count(&self) -> Result<usize>;
}

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    registered: RwLock<HashSet<UserId>>,
    reviews: RwLock<HashMap<UserId, Review>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn register(&self, user_id: UserId) -> Result<bool> {
        Ok(self.registered.write().await.insert(user_id))
    }

    async fn is_registered(&self, user_id: UserId) -> Result<bool> {
        Ok(self.registered.read().await.contains(&user_id))
    }

    async fn find_review(&self, user_id: UserId) -> Result<Option<Review>> {
        Ok(self.reviews.read().await.get(&user_id).cloned())
    }

    async fn save_review(&self, user_id: UserId, review: Review) -> Result<Option<Review>> {
        Ok(self.reviews.write().await.insert(user_id, review))
    }

    async fn registered_count(&self) -> Result<usize> {
        Ok(self.registered.read().await.len())
    }
}
