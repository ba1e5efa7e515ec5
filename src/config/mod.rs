//! Event pack configuration
//!
//! Event definitions are authored as JSON and turned into validated
//! [`GameEvent`]s here. Expected format:
//!
//! ```json
//! {"events": [{"title": "...", "conditions": ["Impaired"], "choices": [...]}]}
//! ```

mod event;

pub use event::*;

use crate::error::Result;
use crate::event::{EventRegistry, GameEvent, RegistryBuilder};
use serde::{Deserialize, Serialize};

/// Top-level event pack document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPack {
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

/// Parse an event pack without validating it
pub fn parse_event_pack(json: &str) -> Result<EventPack> {
    Ok(serde_json::from_str(json)?)
}

/// Parse and validate every event in a pack
pub fn load_events(json: &str) -> Result<Vec<GameEvent>> {
    let pack = parse_event_pack(json)?;
    pack.events
        .into_iter()
        .map(|config| {
            let event = GameEvent::from(config);
            event.validate()?;
            Ok(event)
        })
        .collect()
}

/// Build a registry straight from a pack
pub fn registry_from_json(json: &str) -> Result<EventRegistry> {
    let mut builder = RegistryBuilder::new();
    builder.register_all(load_events(json)?)?;
    Ok(builder.build())
}
