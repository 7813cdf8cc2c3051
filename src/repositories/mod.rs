//! Repository implementations

pub mod user;

pub use user::{UserStore, MemoryUserStore};
