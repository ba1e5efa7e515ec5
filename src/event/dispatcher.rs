//! Event dispatcher
//!
//! Drives the poll/resolve cycle: queued intentional events first, then a
//! weighted ambient draw, then a weighted draw over the chosen option's
//! outcomes. Time and effects are forwarded to external collaborators.

use crate::condition::ConditionContext;
use crate::error::{EventError, Result};
use crate::event::model::{EffectRef, EventChoice, GameEvent};
use crate::event::queue::{EventQueue, EventTrigger};
use crate::event::registry::EventRegistry;
use crate::sampler::sample;
use parking_lot::Mutex;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, trace};

/// Receives the minutes consumed by a resolved outcome
pub trait WorldClock {
    fn advance_minutes(&mut self, minutes: u32);
}

/// Applies an effect to the player character
pub trait EffectSink {
    fn apply_effect(&mut self, effect: &EffectRef);
}

impl EffectSink for Vec<EffectRef> {
    fn apply_effect(&mut self, effect: &EffectRef) {
        self.push(effect.clone());
    }
}

/// Clock that only keeps a running total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLedger {
    pub total_minutes: u64,
    pub advances: u64,
}

impl WorldClock for TimeLedger {
    fn advance_minutes(&mut self, minutes: u32) {
        self.total_minutes = self.total_minutes.saturating_add(u64::from(minutes));
        self.advances = self.advances.saturating_add(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatcherOptions {
    /// When false, polls only drain the intentional queue
    pub ambient_enabled: bool,
}

impl Default for DispatcherOptions {
    fn default() -> Self {
        Self {
            ambient_enabled: true,
        }
    }
}

/// Where the dispatcher is within one poll cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchState {
    #[default]
    Idle,
    EventPresented,
    ChoiceResolved,
}

/// Outcome of resolving a choice
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub event_title: String,
    pub choice_label: String,
    /// Result text to show the player
    pub description: String,
    pub time_added_minutes: u32,
    pub effects: Vec<EffectRef>,
}

/// Selects which event fires next and which outcome a choice leads to.
///
/// Each game session owns its own dispatcher; the registry is shared
/// read-only between sessions.
pub struct EventDispatcher<R = ThreadRng> {
    registry: Arc<EventRegistry>,
    queue: Arc<Mutex<EventQueue>>,
    rng: R,
    options: DispatcherOptions,
    state: DispatchState,
}

impl EventDispatcher<ThreadRng> {
    /// Dispatcher drawing from the thread-local random source
    pub fn new(registry: Arc<EventRegistry>) -> Self {
        Self::with_rng(registry, rand::thread_rng())
    }
}

impl<R: Rng> EventDispatcher<R> {
    /// Dispatcher with an injected (usually seeded) random source
    pub fn with_rng(registry: Arc<EventRegistry>, rng: R) -> Self {
        Self {
            registry,
            queue: Arc::new(Mutex::new(EventQueue::new())),
            rng,
            options: DispatcherOptions::default(),
            state: DispatchState::Idle,
        }
    }

    pub fn with_options(mut self, options: DispatcherOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> DispatcherOptions {
        self.options
    }

    pub fn set_ambient_enabled(&mut self, enabled: bool) {
        self.options.ambient_enabled = enabled;
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn registry(&self) -> &Arc<EventRegistry> {
        &self.registry
    }

    /// Queue an intentional event. `None` is ignored.
    pub fn enqueue(&self, event: impl Into<Option<Arc<GameEvent>>>) {
        self.queue.lock().enqueue(event);
    }

    /// Queue a registered event by title
    pub fn trigger_by_title(&self, title: &str) -> Result<()> {
        let event = self
            .registry
            .get(title)
            .cloned()
            .ok_or_else(|| EventError::EventNotFound(title.to_string()))?;
        debug!(title, "intentional event queued");
        self.queue.lock().enqueue(event);
        Ok(())
    }

    /// Handle for trigger sites that only need to enqueue
    pub fn trigger_handle(&self) -> EventTrigger {
        EventTrigger::new(Arc::clone(&self.queue))
    }

    pub fn queued_len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn peek_queued(&self) -> Option<Arc<GameEvent>> {
        self.queue.lock().peek().cloned()
    }

    /// Drop every queued event and return to idle
    pub fn reset(&mut self) {
        self.queue.lock().clear();
        self.state = DispatchState::Idle;
    }

    /// Pick the next event to present, if any.
    ///
    /// A queued intentional event always wins and bypasses conditions and
    /// weights. Otherwise one eligible ambient event is drawn by base
    /// weight. `Ok(None)` means nothing fires this poll.
    pub fn poll_next_event<C: ConditionContext + ?Sized>(
        &mut self,
        ctx: &C,
    ) -> Result<Option<Arc<GameEvent>>> {
        self.state = DispatchState::Idle;

        let queued = self.queue.lock().try_dequeue();
        if let Some(event) = queued {
            debug!(title = event.title(), source = "queued", "event presented");
            self.state = DispatchState::EventPresented;
            return Ok(Some(event));
        }

        if !self.options.ambient_enabled {
            debug!("ambient events disabled, nothing queued");
            return Ok(None);
        }

        let eligible = self.registry.eligible_events(ctx);
        if eligible.is_empty() {
            debug!("no eligible ambient event");
            return Ok(None);
        }

        let event = Arc::clone(*sample(&eligible, &mut self.rng)?);
        debug!(
            title = event.title(),
            source = "ambient",
            candidates = eligible.len(),
            "event presented"
        );
        self.state = DispatchState::EventPresented;
        Ok(Some(event))
    }

    /// Draw an outcome for `choice`, forward its time cost and effects, and
    /// return what happened.
    ///
    /// `choice` must be one of `event`'s own choices.
    pub fn resolve_choice<W, S>(
        &mut self,
        event: &GameEvent,
        choice: &EventChoice,
        clock: &mut W,
        effects: &mut S,
    ) -> Result<Resolution>
    where
        W: WorldClock + ?Sized,
        S: EffectSink + ?Sized,
    {
        if !event.owns_choice(choice) {
            return Err(EventError::InvalidChoice {
                event: event.title().to_string(),
                choice: choice.label().to_string(),
            });
        }

        let result = sample(choice.results(), &mut self.rng)?;

        clock.advance_minutes(result.time_added_minutes());
        for effect in result.effects() {
            effects.apply_effect(effect);
        }

        debug!(
            title = event.title(),
            choice = choice.label(),
            minutes = result.time_added_minutes(),
            effects = result.effects().len(),
            "choice resolved"
        );
        self.state = DispatchState::ChoiceResolved;

        let resolution = Resolution {
            event_title: event.title().to_string(),
            choice_label: choice.label().to_string(),
            description: result.description().to_string(),
            time_added_minutes: result.time_added_minutes(),
            effects: result.effects().to_vec(),
        };

        // The cycle is complete; the next poll starts from idle
        trace!(from = ?self.state, "dispatch cycle complete");
        self.state = DispatchState::Idle;
        Ok(resolution)
    }

    /// [`resolve_choice`](Self::resolve_choice) keyed by the choice label
    pub fn resolve_choice_by_label<W, S>(
        &mut self,
        event: &GameEvent,
        label: &str,
        clock: &mut W,
        effects: &mut S,
    ) -> Result<Resolution>
    where
        W: WorldClock + ?Sized,
        S: EffectSink + ?Sized,
    {
        let choice = event.choice(label).ok_or_else(|| EventError::InvalidChoice {
            event: event.title().to_string(),
            choice: label.to_string(),
        })?;
        self.resolve_choice(event, choice, clock, effects)
    }
}
