//! Survival Event Core - conditional, weighted narrative event selection
//!
//! Given a snapshot of the player's situation, this crate decides which
//! narrative event fires next, which outcome a chosen option leads to, and
//! what time cost and effects that outcome carries.
//!
//! Intentional events queued by game-state triggers always fire before any
//! ambient event is drawn. Ambient events are filtered by their required
//! [`Condition`]s and drawn by base weight.
//!
//! ```no_run
//! use std::sync::Arc;
//! use survival_event_core::condition::{Activity, ContextSnapshot};
//! use survival_event_core::config::registry_from_json;
//! use survival_event_core::event::{EffectRef, EventDispatcher, TimeLedger};
//!
//! # fn main() -> survival_event_core::error::Result<()> {
//! let registry = Arc::new(registry_from_json(r#"{"events": []}"#)?);
//! let mut dispatcher = EventDispatcher::new(registry);
//! let ctx = ContextSnapshot::new(Activity::Expedition);
//!
//! if let Some(event) = dispatcher.poll_next_event(&ctx)? {
//!     let mut clock = TimeLedger::default();
//!     let mut effects: Vec<EffectRef> = Vec::new();
//!     let choice = &event.choices()[0];
//!     let resolution = dispatcher.resolve_choice(&event, choice, &mut clock, &mut effects)?;
//!     println!("{}", resolution.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod condition;
pub mod config;
pub mod error;
pub mod event;
pub mod sampler;

pub use condition::{Condition, ConditionContext, ContextSnapshot};
pub use error::{EventError, Result};
pub use event::{
    EffectRef, EffectSink, EventChoice, EventDispatcher, EventQueue, EventRegistry, EventResult,
    GameEvent, Resolution, WorldClock,
};
pub use sampler::Weighted;
