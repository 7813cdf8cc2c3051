//! Pure dialog transition table
//!
//! Given the current dialog state, what is known about the user and a
//! classified event, computes the next state and the effects the router has
//! to carry out. No I/O happens here.

use crate::menu::{Edge, MenuAction, MenuGraph, ScreenId};
use crate::models::{Rating, UserSnapshot};
use super::context::DialogState;

/// Classified inbound event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// `/start` or equivalent
    Entry,
    /// A menu button was pressed
    Selection(MenuAction),
    /// Free text message
    Text(String),
}

/// How a screen reaches the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Update the message the selection came from
    Edit,
    /// Post a new message
    Send,
}

/// Transient alert shown to the user who triggered the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AlreadyRegistered,
    Registered,
    MustRegister,
}

impl Notice {
    pub fn text_key(&self) -> &'static str {
        match self {
            Notice::AlreadyRegistered => "notices.already_registered",
            Notice::Registered => "notices.registered",
            Notice::MustRegister => "notices.must_register",
        }
    }
}

/// Effects to be executed after a transition, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CancelReview,
    BeginReview(Rating),
    CompleteReview(String),
    Register,
    Notify(Notice),
    Show { screen: ScreenId, delivery: Delivery },
}

impl Effect {
    fn edit(screen: ScreenId) -> Self {
        Effect::Show { screen, delivery: Delivery::Edit }
    }

    fn send(screen: ScreenId) -> Self {
        Effect::Show { screen, delivery: Delivery::Send }
    }
}

/// Knobs of the transition table that come from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOptions {
    pub idle_text_hint: bool,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self { idle_text_hint: true }
    }
}

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: DialogState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: DialogState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }

    fn prepend(mut self, effect: Effect) -> Self {
        self.effects.insert(0, effect);
        self
    }

    /// Whether a screen is shown, i.e. the user moves somewhere
    pub fn navigates(&self) -> bool {
        self.effects.iter().any(|effect| matches!(effect, Effect::Show { .. }))
    }

    /// First notice among the effects, if any
    pub fn notice(&self) -> Option<Notice> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Notify(notice) => Some(*notice),
            _ => None,
        })
    }
}

/// Pure transition function
pub fn transition(
    state: &DialogState,
    snapshot: &UserSnapshot,
    graph: &MenuGraph,
    event: &DialogEvent,
    options: TransitionOptions,
) -> TransitionResult {
    match (state, event) {
        (DialogState::AwaitingReviewText(_), DialogEvent::Entry) => {
            TransitionResult::new(DialogState::Idle)
                .with_effect(Effect::CancelReview)
                .with_effect(Effect::send(ScreenId::Welcome))
        }
        (DialogState::Idle, DialogEvent::Entry) => {
            TransitionResult::new(DialogState::Idle)
                .with_effect(Effect::send(ScreenId::Welcome))
        }

        // Free text is consumed by a pending dialog before anything else
        (DialogState::AwaitingReviewText(_), DialogEvent::Text(text)) => {
            TransitionResult::new(DialogState::Idle)
                .with_effect(Effect::CompleteReview(text.clone()))
                .with_effect(Effect::send(ScreenId::ReviewAccepted))
        }
        (DialogState::Idle, DialogEvent::Text(_)) => {
            let result = TransitionResult::new(DialogState::Idle);
            if options.idle_text_hint {
                result.with_effect(Effect::send(ScreenId::IdleHint))
            } else {
                result
            }
        }

        (_, DialogEvent::Selection(action)) => {
            let edge = graph.resolve(*action);
            let result = select(edge, snapshot);

            match (state, edge) {
                (DialogState::AwaitingReviewText(_), Edge::DialogEntry(_)) => result,
                // Refused selections leave the screen and the pending dialog alone
                (DialogState::AwaitingReviewText(_), _) if !result.navigates() => TransitionResult {
                    new_state: *state,
                    ..result
                },
                (DialogState::AwaitingReviewText(_), _) => result.prepend(Effect::CancelReview),
                (DialogState::Idle, _) => result,
            }
        }
    }
}

/// Transition for a menu selection, starting from Idle
fn select(edge: Edge, snapshot: &UserSnapshot) -> TransitionResult {
    let idle = TransitionResult::new(DialogState::Idle);

    match edge {
        Edge::Screen(screen) | Edge::BackReference(screen) => idle.with_effect(Effect::edit(screen)),

        Edge::Registration if snapshot.registered => {
            idle.with_effect(Effect::Notify(Notice::AlreadyRegistered))
        }
        Edge::Registration => idle.with_effects([
            Effect::Register,
            Effect::Notify(Notice::Registered),
            Effect::edit(ScreenId::RegistrationComplete),
        ]),

        Edge::Restricted(screen) if snapshot.registered => idle.with_effect(Effect::edit(screen)),
        Edge::Restricted(_) => idle.with_effect(Effect::Notify(Notice::MustRegister)),

        Edge::Reviews if snapshot.has_review() => idle.with_effect(Effect::edit(ScreenId::ReviewShow)),
        Edge::Reviews => idle.with_effect(Effect::edit(ScreenId::ReviewStars)),

        Edge::DialogEntry(rating) => TransitionResult::new(DialogState::AwaitingReviewText(rating))
            .with_effects([Effect::BeginReview(rating), Effect::send(ScreenId::ReviewPrompt)]),
    }
}
