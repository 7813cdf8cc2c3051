//! User store whose review writes always fail

use async_trait::async_trait;
use TechnikumBot::models::{Review, UserId};
use TechnikumBot::repositories::UserStore;
use TechnikumBot::utils::errors::{Result, TechnikumBotError};

#[derive(Debug, Default)]
pub struct ReviewWriteFailingStore;

#[async_trait]
impl UserStore for ReviewWriteFailingStore {
    async fn register(&self, _user_id: UserId) -> Result<bool> {
        Ok(true)
    }

    async fn is_registered(&self, _user_id: UserId) -> Result<bool> {
        Ok(false)
    }

    async fn find_review(&self, _user_id: UserId) -> Result<Option<Review>> {
        Ok(None)
    }

    async fn save_review(&self, _user_id: UserId, _review: Review) -> Result<Option<Review>> {
        Err(TechnikumBotError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full")))
    }

    async fn registered_count(&self) -> Result<usize> {
        Ok(0)
    }
}
