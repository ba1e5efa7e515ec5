//! Event configuration structures

use crate::condition::Condition;
use crate::event::{EffectRef, EventChoice, EventResult, GameEvent};
use serde::{Deserialize, Serialize};

/// Authored event definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_weight")]
    pub base_weight: f64,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub intentional_only: bool,
    pub choices: Vec<ChoiceConfig>,
}

/// Authored choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceConfig {
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub results: Vec<ResultConfig>,
}

/// Authored outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultConfig {
    pub description: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub time_added_minutes: u32,
    #[serde(default)]
    pub effects: Vec<EffectRef>,
}

fn default_weight() -> f64 {
    1.0
}

impl From<ResultConfig> for EventResult {
    fn from(config: ResultConfig) -> Self {
        config.effects.into_iter().fold(
            EventResult::new(config.description, config.weight).with_time(config.time_added_minutes),
            |result, effect| result.with_effect(effect),
        )
    }
}

impl From<ChoiceConfig> for EventChoice {
    fn from(config: ChoiceConfig) -> Self {
        config.results.into_iter().fold(
            EventChoice::new(config.label, config.description),
            |choice, result| choice.with_result(result.into()),
        )
    }
}

impl From<EventConfig> for GameEvent {
    fn from(config: EventConfig) -> Self {
        let mut event = GameEvent::new(config.title, config.description, config.base_weight)
            .with_conditions(config.conditions);
        if config.intentional_only {
            event = event.intentional_only();
        }
        config
            .choices
            .into_iter()
            .fold(event, |event, choice| event.with_choice(choice.into()))
    }
}
