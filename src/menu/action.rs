//! Menu actions
//!
//! Every button the bot shows carries one of these actions, serialized as the
//! callback data string Telegram sends back when the button is pressed.

use std::fmt;
use std::str::FromStr;
use crate::models::Rating;
use crate::utils::errors::{TechnikumBotError, Result};

const STAR_PREFIX: &str = "star_";

/// Selectable menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Stats,
    RegisterMe,
    Faq,
    FaqDocsDetail,
    Teachers,
    ReviewsMenu,
    About,
    BackToMain,
    Star(Rating),
}

impl MenuAction {
    /// Every action, in menu order
    pub fn all() -> Vec<MenuAction> {
        let mut actions = vec![
            MenuAction::Stats,
            MenuAction::RegisterMe,
            MenuAction::Faq,
            MenuAction::FaqDocsDetail,
            MenuAction::Teachers,
            MenuAction::ReviewsMenu,
            MenuAction::About,
            MenuAction::BackToMain,
        ];
        actions.extend(Rating::all().map(MenuAction::Star));
        actions
    }

    /// Callback data sent with the button
    pub fn callback_data(&self) -> String {
        match self {
            MenuAction::Stats => "stats".to_string(),
            MenuAction::RegisterMe => "register_me".to_string(),
            MenuAction::Faq => "faq".to_string(),
            MenuAction::FaqDocsDetail => "faq_docs_detail".to_string(),
            MenuAction::Teachers => "teachers".to_string(),
            MenuAction::ReviewsMenu => "reviews_menu".to_string(),
            MenuAction::About => "about".to_string(),
            MenuAction::BackToMain => "back_to_main".to_string(),
            MenuAction::Star(rating) => format!("{}{}", STAR_PREFIX, rating),
        }
    }

    /// Parse callback data; unknown data is a routing error
    pub fn parse(data: &str) -> Result<Self> {
        let action = match data {
            "stats" => MenuAction::Stats,
            "register_me" => MenuAction::RegisterMe,
            "faq" => MenuAction::Faq,
            "faq_docs_detail" => MenuAction::FaqDocsDetail,
            "teachers" => MenuAction::Teachers,
            "reviews_menu" => MenuAction::ReviewsMenu,
            "about" => MenuAction::About,
            "back_to_main" => MenuAction::BackToMain,
            _ => {
                let rating = data
                    .strip_prefix(STAR_PREFIX)
                    .and_then(|n| n.parse::<u8>().ok())
                    .and_then(|n| Rating::new(n).ok())
                    .ok_or_else(|| TechnikumBotError::Routing(data.to_string()))?;
                MenuAction::Star(rating)
            }
        };

        Ok(action)
    }

    pub fn is_star(&self) -> bool {
        matches!(self, MenuAction::Star(_))
    }
}

impl FromStr for MenuAction {
    type Err = TechnikumBotError;

    fn from_str(s: &str) -> Result<Self> {
        MenuAction::parse(s)
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.callback_data())
    }
}
