//! Menu module
//!
//! Static definition of the bot's screens, the buttons they offer and the
//! transition each button triggers.

pub mod action;
pub mod graph;

pub use action::MenuAction;
pub use graph::{Button, Edge, MenuGraph, Screen, ScreenId};
