//! Event definition store

use crate::condition::{all_match, ConditionContext};
use crate::error::{EventError, Result};
use crate::event::model::GameEvent;
use ahash::AHashMap;
use std::sync::Arc;
use tracing::{info, trace, warn};

/// Collects and validates event definitions at startup
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    events: Vec<Arc<GameEvent>>,
    index: AHashMap<String, usize>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add an event. Malformed or duplicate definitions are
    /// rejected here so they can never be dispatched.
    pub fn register(&mut self, event: GameEvent) -> Result<&mut Self> {
        if let Err(err) = event.validate() {
            warn!(error = %err, "rejected event definition");
            return Err(err);
        }
        if self.index.contains_key(event.title()) {
            warn!(title = event.title(), "rejected duplicate event title");
            return Err(EventError::DuplicateEvent(event.title().to_string()));
        }

        self.index.insert(event.title().to_string(), self.events.len());
        self.events.push(Arc::new(event));
        Ok(self)
    }

    pub fn register_all(&mut self, events: impl IntoIterator<Item = GameEvent>) -> Result<&mut Self> {
        for event in events {
            self.register(event)?;
        }
        Ok(self)
    }

    pub fn build(self) -> EventRegistry {
        info!(events = self.events.len(), "event registry built");
        EventRegistry {
            events: self.events,
            index: self.index,
        }
    }
}

/// Read-only registry of every known event template
#[derive(Debug, Default)]
pub struct EventRegistry {
    events: Vec<Arc<GameEvent>>,
    index: AHashMap<String, usize>,
}

impl EventRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// All events in registration order
    pub fn all_events(&self) -> &[Arc<GameEvent>] {
        &self.events
    }

    pub fn get(&self, title: &str) -> Option<&Arc<GameEvent>> {
        self.index.get(title).map(|&i| &self.events[i])
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events that may fire ambiently under `ctx`, in registration order.
    ///
    /// Intentional-only events are skipped; everything else must have all
    /// its conditions hold.
    pub fn eligible_events<C: ConditionContext + ?Sized>(&self, ctx: &C) -> Vec<&Arc<GameEvent>> {
        self.events
            .iter()
            .filter(|event| {
                let eligible =
                    !event.is_intentional_only() && all_match(event.conditions(), ctx);
                trace!(title = event.title(), eligible, "eligibility check");
                eligible
            })
            .collect()
    }
}
