//! Menu graph
//!
//! Static screen definitions and the edge each action leads to. The graph is
//! a star around `main_menu`: every screen offers a way back to the hub, the
//! faq detail screen returns to the faq submenu instead.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use crate::i18n::I18n;
use crate::models::Rating;
use crate::utils::errors::{TechnikumBotError, Result};
use super::MenuAction;

/// Screen identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Welcome,
    MainMenu,
    RegistrationComplete,
    Faq,
    FaqDocsDetail,
    Teachers,
    About,
    Stats,
    ReviewStars,
    ReviewShow,
    ReviewPrompt,
    ReviewAccepted,
    IdleHint,
}

impl ScreenId {
    pub const ALL: [ScreenId; 13] = [
        ScreenId::Welcome,
        ScreenId::MainMenu,
        ScreenId::RegistrationComplete,
        ScreenId::Faq,
        ScreenId::FaqDocsDetail,
        ScreenId::Teachers,
        ScreenId::About,
        ScreenId::Stats,
        ScreenId::ReviewStars,
        ScreenId::ReviewShow,
        ScreenId::ReviewPrompt,
        ScreenId::ReviewAccepted,
        ScreenId::IdleHint,
    ];

    /// Screens shown without a preceding menu selection
    pub const ENTRY_POINTS: [ScreenId; 3] = [ScreenId::Welcome, ScreenId::MainMenu, ScreenId::IdleHint];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Welcome => "welcome",
            ScreenId::MainMenu => "main_menu",
            ScreenId::RegistrationComplete => "registration_complete",
            ScreenId::Faq => "faq",
            ScreenId::FaqDocsDetail => "faq_docs_detail",
            ScreenId::Teachers => "teachers",
            ScreenId::About => "about",
            ScreenId::Stats => "stats",
            ScreenId::ReviewStars => "review_stars",
            ScreenId::ReviewShow => "review_show",
            ScreenId::ReviewPrompt => "review_prompt",
            ScreenId::ReviewAccepted => "review_accepted",
            ScreenId::IdleHint => "idle_hint",
        }
    }

    /// Translation key of the screen body
    pub fn body_key(&self) -> String {
        format!("screens.{}", self.as_str())
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an action leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Plain navigation to a static screen
    Screen(ScreenId),
    /// Return to a hub screen
    BackReference(ScreenId),
    /// Start of the rating -> text review dialog
    DialogEntry(Rating),
    /// Add the user to the registered set
    Registration,
    /// Screen shown to registered users only
    Restricted(ScreenId),
    /// Stored review if there is one, star selector otherwise
    Reviews,
}

impl Edge {
    /// Screens this edge may end up showing
    pub fn targets(&self) -> Vec<ScreenId> {
        match self {
            Edge::Screen(id) | Edge::BackReference(id) | Edge::Restricted(id) => vec![*id],
            Edge::DialogEntry(_) => vec![ScreenId::ReviewPrompt],
            Edge::Registration => vec![ScreenId::RegistrationComplete],
            Edge::Reviews => vec![ScreenId::ReviewShow, ScreenId::ReviewStars],
        }
    }
}

/// A button: the action it triggers and the translation key of its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub action: MenuAction,
    pub label_key: &'static str,
}

impl Button {
    fn new(action: MenuAction, label_key: &'static str) -> Self {
        Self { action, label_key }
    }

    fn standard(action: MenuAction) -> Self {
        let label_key = match action {
            MenuAction::Stats => "actions.stats",
            MenuAction::RegisterMe => "actions.register_me",
            MenuAction::Faq => "actions.faq",
            MenuAction::FaqDocsDetail => "actions.faq_docs_detail",
            MenuAction::Teachers => "actions.teachers",
            MenuAction::ReviewsMenu => "actions.reviews_menu",
            MenuAction::About => "actions.about",
            MenuAction::BackToMain => "actions.back_to_main",
            MenuAction::Star(_) => "actions.star",
        };
        Self::new(action, label_key)
    }
}

/// Static screen definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub id: ScreenId,
    /// Body uses Telegram HTML markup
    pub html: bool,
    pub rows: Vec<Vec<Button>>,
}

impl Screen {
    fn new(id: ScreenId, html: bool, rows: Vec<Vec<Button>>) -> Self {
        Self { id, html, rows }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    pub fn action_count(&self) -> usize {
        self.buttons().count()
    }
}

fn main_menu_rows() -> Vec<Vec<Button>> {
    [
        MenuAction::Stats,
        MenuAction::RegisterMe,
        MenuAction::Faq,
        MenuAction::Teachers,
        MenuAction::ReviewsMenu,
        MenuAction::About,
    ]
    .into_iter()
    .map(|action| vec![Button::standard(action)])
    .collect()
}

fn back_to_main_rows() -> Vec<Vec<Button>> {
    vec![vec![Button::standard(MenuAction::BackToMain)]]
}

fn star_rows() -> Vec<Vec<Button>> {
    vec![Rating::all().map(|r| Button::standard(MenuAction::Star(r))).collect()]
}

/// The menu graph: screens and action edges
#[derive(Debug, Clone)]
pub struct MenuGraph {
    screens: HashMap<ScreenId, Screen>,
}

impl MenuGraph {
    pub const ROOT: ScreenId = ScreenId::MainMenu;

    pub fn new() -> Self {
        let screens = vec![
            Screen::new(ScreenId::Welcome, false, main_menu_rows()),
            Screen::new(ScreenId::MainMenu, false, main_menu_rows()),
            Screen::new(ScreenId::RegistrationComplete, false, main_menu_rows()),
            Screen::new(ScreenId::Faq, false, vec![
                vec![Button::standard(MenuAction::FaqDocsDetail)],
                vec![Button::new(MenuAction::BackToMain, "actions.back_to_main_from_faq")],
            ]),
            Screen::new(ScreenId::FaqDocsDetail, true, vec![
                vec![Button::new(MenuAction::Faq, "actions.back_to_faq")],
            ]),
            Screen::new(ScreenId::Teachers, true, back_to_main_rows()),
            Screen::new(ScreenId::About, true, back_to_main_rows()),
            Screen::new(ScreenId::Stats, true, back_to_main_rows()),
            Screen::new(ScreenId::ReviewStars, false, star_rows()),
            Screen::new(ScreenId::ReviewShow, false, main_menu_rows()),
            Screen::new(ScreenId::ReviewPrompt, false, vec![]),
            Screen::new(ScreenId::ReviewAccepted, false, main_menu_rows()),
            Screen::new(ScreenId::IdleHint, false, vec![]),
        ];

        Self {
            screens: screens.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Edge triggered by `action`
    pub fn resolve(&self, action: MenuAction) -> Edge {
        match action {
            MenuAction::Stats => Edge::Restricted(ScreenId::Stats),
            MenuAction::RegisterMe => Edge::Registration,
            MenuAction::Faq => Edge::Screen(ScreenId::Faq),
            MenuAction::FaqDocsDetail => Edge::Screen(ScreenId::FaqDocsDetail),
            MenuAction::Teachers => Edge::Screen(ScreenId::Teachers),
            MenuAction::ReviewsMenu => Edge::Reviews,
            MenuAction::About => Edge::Screen(ScreenId::About),
            MenuAction::BackToMain => Edge::BackReference(Self::ROOT),
            MenuAction::Star(rating) => Edge::DialogEntry(rating),
        }
    }

    pub fn screen(&self, id: ScreenId) -> Result<&Screen> {
        self.screens
            .get(&id)
            .ok_or_else(|| TechnikumBotError::GraphInconsistency(format!("Screen '{}' is not defined", id)))
    }

    /// Screens reachable in one step from `id`
    fn successors(&self, id: ScreenId) -> Vec<ScreenId> {
        let mut next: Vec<ScreenId> = match self.screens.get(&id) {
            Some(screen) => screen
                .buttons()
                .flat_map(|b| self.resolve(b.action).targets())
                .collect(),
            None => Vec::new(),
        };

        // The review prompt is answered with free text, not a button
        if id == ScreenId::ReviewPrompt {
            next.push(ScreenId::ReviewAccepted);
        }

        next
    }

    fn reachable_from(&self, start: &[ScreenId]) -> HashSet<ScreenId> {
        let mut seen: HashSet<ScreenId> = start.iter().copied().collect();
        let mut queue: VecDeque<ScreenId> = start.iter().copied().collect();

        while let Some(id) = queue.pop_front() {
            for next in self.successors(id) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        seen
    }

    /// Check the graph is complete and consistent with the translations
    pub fn validate(&self, i18n: &I18n) -> Result<()> {
        for id in ScreenId::ALL {
            self.screen(id)?;
        }

        let used: HashSet<MenuAction> = self
            .screens
            .values()
            .flat_map(|s| s.buttons().map(|b| b.action))
            .collect();
        for action in MenuAction::all() {
            if !used.contains(&action) {
                return Err(TechnikumBotError::GraphInconsistency(
                    format!("Action '{}' is not offered by any screen", action)
                ));
            }
        }

        let reachable = self.reachable_from(&ScreenId::ENTRY_POINTS);
        for id in ScreenId::ALL {
            if !reachable.contains(&id) {
                return Err(TechnikumBotError::GraphInconsistency(
                    format!("Screen '{}' is unreachable", id)
                ));
            }
        }

        for screen in self.screens.values().filter(|s| !s.rows.is_empty()) {
            if !self.reachable_from(&[screen.id]).contains(&Self::ROOT) {
                return Err(TechnikumBotError::GraphInconsistency(
                    format!("Screen '{}' has no way back to {}", screen.id, Self::ROOT)
                ));
            }
        }

        for lang in i18n.supported_languages() {
            for screen in self.screens.values() {
                let body_key = screen.id.body_key();
                if !i18n.has_key(&body_key, lang) {
                    return Err(TechnikumBotError::GraphInconsistency(
                        format!("Missing text '{}' for language '{}'", body_key, lang)
                    ));
                }
                for button in screen.buttons() {
                    if !i18n.has_key(button.label_key, lang) {
                        return Err(TechnikumBotError::GraphInconsistency(
                            format!("Missing label '{}' for language '{}'", button.label_key, lang)
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for MenuGraph {
    fn default() -> Self {
        Self::new()
    }
}
