//! Event router
//!
//! Classifies inbound events, runs them through the dialog transition table
//! and carries out the resulting effects. The router knows nothing about
//! Telegram; updates reach it as [`InboundEvent`]s and leave it through a
//! [`ChatSink`].

use std::sync::Arc;
use tracing::{debug, info, warn};
use crate::i18n::I18n;
use crate::menu::{MenuAction, MenuGraph, ScreenId};
use crate::models::{UserId, UserSnapshot};
use crate::render::{ChatRef, ChatSink, MessageRef, RenderContext, Renderer};
use crate::services::{RegistrationOutcome, ServiceFactory};
use crate::state::{
    transition, Delivery, DialogEvent, DialogState, Effect, Notice, TransitionOptions,
    TransitionResult,
};
use crate::utils::errors::{TechnikumBotError, Result};
use crate::utils::logging::{log_dialog_transition, log_dropped_event, log_render_conflict, log_user_action};

/// Event as delivered by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub user_id: UserId,
    pub chat: ChatRef,
    /// Language code reported by the client, e.g. "en-US"
    pub language: Option<String>,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Entry command (`/start`)
    Entry,
    /// Button press
    Selection {
        query_id: String,
        data: String,
        /// Message carrying the pressed button, if it can still be edited
        message: Option<MessageRef>,
    },
    /// Free text message
    Text(String),
}

/// Per-event routing data
struct Target {
    user_id: UserId,
    chat: ChatRef,
    message: Option<MessageRef>,
    language: String,
}

pub struct EventRouter {
    services: ServiceFactory,
    graph: Arc<MenuGraph>,
    renderer: Renderer,
    sink: Arc<dyn ChatSink>,
    i18n: Arc<I18n>,
    options: TransitionOptions,
}

impl EventRouter {
    pub fn new(
        services: ServiceFactory,
        graph: Arc<MenuGraph>,
        i18n: Arc<I18n>,
        sink: Arc<dyn ChatSink>,
        options: TransitionOptions,
    ) -> Self {
        let renderer = Renderer::new(graph.clone(), i18n.clone());
        Self {
            services,
            graph,
            renderer,
            sink,
            i18n,
            options,
        }
    }

    pub fn services(&self) -> &ServiceFactory {
        &self.services
    }

    /// Route one inbound event to completion
    pub async fn handle(&self, event: InboundEvent) -> Result<()> {
        let target = Target {
            user_id: event.user_id,
            chat: event.chat,
            message: None,
            language: self.i18n.detect_user_language(event.language.as_deref()),
        };

        match event.kind {
            EventKind::Entry => {
                log_user_action(target.user_id, "entry", None);
                self.dispatch(&target, DialogEvent::Entry, None).await
            }
            EventKind::Text(text) => {
                debug!(user_id = %target.user_id, length = text.len(), "Free text received");
                self.dispatch(&target, DialogEvent::Text(text), None).await
            }
            EventKind::Selection { query_id, data, message } => {
                let target = Target { message, ..target };
                match MenuAction::parse(&data) {
                    Ok(action) => {
                        log_user_action(target.user_id, "select", Some(&data));
                        self.dispatch(&target, DialogEvent::Selection(action), Some(&query_id)).await
                    }
                    Err(e) => {
                        log_dropped_event(target.user_id, "routing", Some(&e.to_string()));
                        self.acknowledge(&query_id, None, &target.language).await;
                        Ok(())
                    }
                }
            }
        }
    }

    async fn dispatch(&self, target: &Target, event: DialogEvent, query_id: Option<&str>) -> Result<()> {
        let tracker = &self.services.dialog_tracker;

        let state = tracker.current_state(target.user_id).await;
        let snapshot = match self.services.user_service.snapshot(target.user_id).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                if let Some(query_id) = query_id {
                    self.acknowledge(query_id, None, &target.language).await;
                }
                return Err(e);
            }
        };

        let result = transition(&state, &snapshot, &self.graph, &event, self.options);

        // The pending indicator is closed before any slower delivery happens
        if let Some(query_id) = query_id {
            self.acknowledge(query_id, result.notice(), &target.language).await;
        }

        let applied = self.apply(target, state, snapshot, result).await;

        let reached = tracker.current_state(target.user_id).await;
        log_dialog_transition(target.user_id, &state, &reached);

        applied
    }

    async fn apply(
        &self,
        target: &Target,
        state: DialogState,
        mut snapshot: UserSnapshot,
        result: TransitionResult,
    ) -> Result<()> {
        let tracker = &self.services.dialog_tracker;
        let users = &self.services.user_service;
        let mut rating = state.pending_rating();

        for effect in result.effects {
            match effect {
                Effect::CancelReview => {
                    if let Some(abandoned) = tracker.cancel_review(target.user_id).await {
                        info!(user_id = %target.user_id, rating = %abandoned, "Pending review abandoned");
                    }
                }
                Effect::BeginReview(chosen) => {
                    tracker.begin_review(target.user_id, chosen).await;
                    rating = Some(chosen);
                }
                Effect::CompleteReview(text) => {
                    match tracker.complete_review(target.user_id, &text).await {
                        Ok(review) => {
                            log_user_action(target.user_id, "review_submitted", Some(&review.to_string()));
                            snapshot.review = Some(review);
                        }
                        Err(e @ TechnikumBotError::NoPendingReview { .. }) => {
                            log_dropped_event(target.user_id, "no_pending_review", Some(&e.to_string()));
                            return Ok(());
                        }
                        Err(e) => return Err(e),
                    }
                }
                Effect::Register => {
                    if users.register_user(target.user_id).await? == RegistrationOutcome::Registered {
                        log_user_action(target.user_id, "registered", None);
                    }
                    snapshot.registered = true;
                }
                Effect::Notify(Notice::MustRegister) => {
                    info!(user_id = %target.user_id, "Restricted screen refused, registration required");
                }
                Effect::Notify(notice) => {
                    // Delivered with the acknowledgement
                    debug!(user_id = %target.user_id, notice = ?notice, "Notice issued");
                }
                Effect::Show { screen, delivery } => {
                    let ctx = RenderContext {
                        language: target.language.clone(),
                        registered: snapshot.registered,
                        review: snapshot.review.clone(),
                        rating,
                    };
                    self.show(target, screen, delivery, &ctx).await?;
                }
            }
        }

        Ok(())
    }

    async fn show(&self, target: &Target, screen: ScreenId, delivery: Delivery, ctx: &RenderContext) -> Result<()> {
        let rendered = self.renderer.render(screen, ctx)?;

        match (delivery, target.message) {
            (Delivery::Edit, Some(message)) => match self.sink.edit(message, &rendered).await {
                Ok(()) => Ok(()),
                Err(TechnikumBotError::RenderConflict(reason)) => {
                    log_render_conflict(target.user_id, screen.as_str(), &reason);
                    Ok(())
                }
                Err(e) => {
                    warn!(user_id = %target.user_id, screen = %screen, error = %e, "Failed to edit message");
                    Ok(())
                }
            },
            (Delivery::Edit, None) => {
                debug!(user_id = %target.user_id, screen = %screen, "No editable message, sending a new one");
                self.sink.send(target.chat, &rendered).await
            }
            (Delivery::Send, _) => self.sink.send(target.chat, &rendered).await,
        }
    }

    async fn acknowledge(&self, query_id: &str, notice: Option<Notice>, lang: &str) {
        let text = notice.map(|n| self.renderer.notice(n, lang));

        if let Err(e) = self.sink.acknowledge(query_id, text.as_deref()).await {
            warn!(callback_id = %query_id, error = %e, "Failed to answer callback query");
        }
    }
}
