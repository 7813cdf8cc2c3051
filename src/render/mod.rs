//! Render layer
//!
//! Turns a screen definition plus per-user context into the text and buttons
//! that go out to the chat. Rendering is deterministic; delivery lives behind
//! the [`ChatSink`] trait.

pub mod sink;
pub mod telegram;

pub use sink::{ChatRef, ChatSink, MessageRef};
pub use telegram::TelegramSink;

use std::collections::HashMap;
use std::sync::Arc;
use crate::i18n::I18n;
use crate::menu::{MenuAction, MenuGraph, ScreenId};
use crate::models::{Rating, Review};
use crate::state::Notice;
use crate::utils::errors::{TechnikumBotError, Result};

/// Longest text Telegram accepts in a single message
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Per-user data a screen may interpolate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub language: String,
    pub registered: bool,
    pub review: Option<Review>,
    pub rating: Option<Rating>,
}

/// A rendered button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedButton {
    pub label: String,
    pub callback_data: String,
}

/// Outbound message body and action rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScreen {
    pub screen: ScreenId,
    pub text: String,
    /// Text uses Telegram HTML markup
    pub html: bool,
    pub rows: Vec<Vec<RenderedButton>>,
}

impl RenderedScreen {
    pub fn buttons(&self) -> impl Iterator<Item = &RenderedButton> {
        self.rows.iter().flatten()
    }

    pub fn has_buttons(&self) -> bool {
        self.rows.iter().any(|row| !row.is_empty())
    }
}

#[derive(Clone)]
pub struct Renderer {
    graph: Arc<MenuGraph>,
    i18n: Arc<I18n>,
}

impl Renderer {
    pub fn new(graph: Arc<MenuGraph>, i18n: Arc<I18n>) -> Self {
        Self { graph, i18n }
    }

    pub fn render(&self, id: ScreenId, ctx: &RenderContext) -> Result<RenderedScreen> {
        let screen = self.graph.screen(id)?;

        let mut params = HashMap::new();
        match id {
            ScreenId::ReviewShow => {
                let review = ctx.review.as_ref().ok_or_else(|| {
                    TechnikumBotError::InvalidInput("review_show needs a stored review".to_string())
                })?;
                params.insert("review".to_string(), review.to_string());
            }
            ScreenId::ReviewPrompt => {
                let rating = ctx.rating.ok_or_else(|| {
                    TechnikumBotError::InvalidInput("review_prompt needs a chosen rating".to_string())
                })?;
                params.insert("rating".to_string(), rating.to_string());
            }
            _ => {}
        }

        let text = self.i18n.t(&screen.id.body_key(), &ctx.language, Some(&params));
        // Rich screens are static; plain ones may carry user text of any length
        let text = if screen.html { text } else { truncate(text, MAX_MESSAGE_CHARS) };

        let rows = screen
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| RenderedButton {
                        label: self.label(button.action, button.label_key, &ctx.language),
                        callback_data: button.action.callback_data(),
                    })
                    .collect()
            })
            .collect();

        Ok(RenderedScreen {
            screen: id,
            text,
            html: screen.html,
            rows,
        })
    }

    fn label(&self, action: MenuAction, key: &str, lang: &str) -> String {
        match action {
            MenuAction::Star(rating) => {
                let mut params = HashMap::new();
                params.insert("rating".to_string(), rating.to_string());
                self.i18n.t(key, lang, Some(&params))
            }
            _ => self.i18n.t(key, lang, None),
        }
    }

    pub fn notice(&self, notice: Notice, lang: &str) -> String {
        self.i18n.t(notice.text_key(), lang, None)
    }
}

fn truncate(text: String, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text;
    }

    let mut cut: String = text.chars().take(max_chars - 1).collect();
    cut.push('…');
    cut
}
