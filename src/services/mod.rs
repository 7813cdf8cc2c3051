//! Services module
//!
//! This module contains business logic services

pub mod user;

// Re-export commonly used services
pub use user::{UserService, RegistrationOutcome};

use std::sync::Arc;
use crate::repositories::{MemoryUserStore, UserStore};
use crate::state::DialogStateTracker;

/// Service factory for creating and wiring the shared state containers
#[derive(Clone)]
pub struct ServiceFactory {
    pub user_service: UserService,
    pub dialog_tracker: Arc<DialogStateTracker>,
}

impl ServiceFactory {
    /// Create services over the given user store
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        let user_service = UserService::new(store);
        let dialog_tracker = Arc::new(DialogStateTracker::new(user_service.clone()));

        Self {
            user_service,
            dialog_tracker,
        }
    }

    /// Create services backed by process memory
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryUserStore::new()))
    }
}
