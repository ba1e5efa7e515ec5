//! Event definition types
//!
//! Events, choices and results are value objects: built once, then shared
//! behind an `Arc` and never mutated.

use crate::condition::Condition;
use crate::error::{EventError, Result};
use crate::sampler::Weighted;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;

/// Opaque handle to an effect owned by the effect-application collaborator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectRef(String);

impl EffectRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EffectRef {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for EffectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A leaf outcome of a choice
#[derive(Debug, Clone, PartialEq)]
pub struct EventResult {
    description: String,
    weight: f64,
    time_added_minutes: u32,
    effects: Vec<EffectRef>,
}

impl EventResult {
    pub fn new(description: impl Into<String>, weight: f64) -> Self {
        Self {
            description: description.into(),
            weight,
            time_added_minutes: 0,
            effects: Vec::new(),
        }
    }

    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time_added_minutes = minutes;
        self
    }

    pub fn with_effect(mut self, effect: impl Into<EffectRef>) -> Self {
        self.effects.push(effect.into());
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn time_added_minutes(&self) -> u32 {
        self.time_added_minutes
    }

    pub fn effects(&self) -> &[EffectRef] {
        &self.effects
    }
}

impl Weighted for EventResult {
    #[inline]
    fn weight(&self) -> f64 {
        self.weight
    }
}

/// One option presented to the player
#[derive(Debug, Clone, PartialEq)]
pub struct EventChoice {
    label: String,
    description: String,
    results: Vec<EventResult>,
}

impl EventChoice {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            results: Vec::new(),
        }
    }

    pub fn with_result(mut self, result: EventResult) -> Self {
        self.results.push(result);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn results(&self) -> &[EventResult] {
        &self.results
    }
}

/// Immutable narrative event template, keyed by its title
#[derive(Debug, Clone, PartialEq)]
pub struct GameEvent {
    title: String,
    description: String,
    base_weight: f64,
    conditions: SmallVec<[Condition; 4]>,
    choices: Vec<EventChoice>,
    intentional_only: bool,
}

impl GameEvent {
    pub fn new(title: impl Into<String>, description: impl Into<String>, base_weight: f64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            base_weight,
            conditions: SmallVec::new(),
            choices: Vec::new(),
            intentional_only: false,
        }
    }

    /// Require a condition. Conditions form a set, so repeats are ignored.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        if !self.conditions.contains(&condition) {
            self.conditions.push(condition);
        }
        self
    }

    pub fn with_conditions(self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        conditions
            .into_iter()
            .fold(self, |event, condition| event.with_condition(condition))
    }

    pub fn with_choice(mut self, choice: EventChoice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Keep this event out of the ambient pool; it can only be queued.
    pub fn intentional_only(mut self) -> Self {
        self.intentional_only = true;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn base_weight(&self) -> f64 {
        self.base_weight
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Choices in display order
    pub fn choices(&self) -> &[EventChoice] {
        &self.choices
    }

    pub fn is_intentional_only(&self) -> bool {
        self.intentional_only
    }

    pub fn choice(&self, label: &str) -> Option<&EventChoice> {
        self.choices.iter().find(|c| c.label == label)
    }

    /// Whether `choice` is one of this event's own choices
    pub fn owns_choice(&self, choice: &EventChoice) -> bool {
        self.choices
            .iter()
            .any(|own| std::ptr::eq(own, choice) || own == choice)
    }

    /// Check the structural invariants every registered event must satisfy
    pub fn validate(&self) -> Result<()> {
        let title = self.title.as_str();
        if title.trim().is_empty() {
            return Err(EventError::malformed(title, "title is empty"));
        }
        check_weight(title, "base weight", self.base_weight)?;
        if self.choices.is_empty() {
            return Err(EventError::malformed(title, "event has no choices"));
        }

        let mut labels = HashSet::with_capacity(self.choices.len());
        for choice in &self.choices {
            if choice.label.trim().is_empty() {
                return Err(EventError::malformed(title, "choice label is empty"));
            }
            if !labels.insert(choice.label.as_str()) {
                return Err(EventError::malformed(
                    title,
                    format!("duplicate choice label '{}'", choice.label),
                ));
            }
            if choice.results.is_empty() {
                return Err(EventError::malformed(
                    title,
                    format!("choice '{}' has no results", choice.label),
                ));
            }
            for result in &choice.results {
                check_weight(
                    title,
                    &format!("result weight in choice '{}'", choice.label),
                    result.weight,
                )?;
            }
        }

        Ok(())
    }
}

impl Weighted for GameEvent {
    #[inline]
    fn weight(&self) -> f64 {
        self.base_weight
    }
}

fn check_weight(event: &str, what: &str, weight: f64) -> Result<()> {
    if !weight.is_finite() {
        return Err(EventError::malformed(event, format!("{} is not finite", what)));
    }
    if weight < 0.0 {
        return Err(EventError::malformed(
            event,
            format!("{} is negative ({})", what, weight),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lost_your_bearings() -> GameEvent {
        GameEvent::new(
            "Lost Your Bearings",
            "The trees all look the same. You are no longer sure which way camp is.",
            1.0,
        )
        .with_conditions([Condition::Impaired, Condition::IsExpedition])
        .with_choice(
            EventChoice::new("Trust Your Gut", "Pick a direction and commit.")
                .with_result(EventResult::new("You find the trail again.", 0.5).with_time(20))
                .with_result(EventResult::new("You wander deeper in.", 0.35).with_time(60))
                .with_result(
                    EventResult::new("You stumble down a bank.", 0.15)
                        .with_time(45)
                        .with_effect("sprained_ankle"),
                ),
        )
        .with_choice(
            EventChoice::new("Turn Back", "Retrace your steps.")
                .with_result(EventResult::new("You head back the way you came.", 1.0).with_time(30)),
        )
    }

    #[test]
    fn test_valid_event() {
        let event = lost_your_bearings();
        assert!(event.validate().is_ok());
        assert_eq!(event.conditions().len(), 2);
        assert_eq!(event.choices()[0].label(), "Trust Your Gut");
        assert_eq!(event.choices()[1].label(), "Turn Back");
    }

    #[test]
    fn test_conditions_are_a_set() {
        let event = GameEvent::new("Trip", "", 1.0)
            .with_condition(Condition::Clumsy)
            .with_condition(Condition::Clumsy);
        assert_eq!(event.conditions(), &[Condition::Clumsy]);
    }

    #[test]
    fn test_choice_without_results_is_malformed() {
        let event = GameEvent::new("Rockslide", "", 1.0).with_choice(EventChoice::new("Run", ""));
        let err = event.validate().unwrap_err();
        assert_eq!(
            err,
            EventError::malformed("Rockslide", "choice 'Run' has no results")
        );
    }

    #[test]
    fn test_negative_weights_are_malformed() {
        let event = GameEvent::new("Storm", "", -1.0).with_choice(
            EventChoice::new("Hide", "").with_result(EventResult::new("Dry", 1.0)),
        );
        assert!(matches!(event.validate(), Err(EventError::MalformedEvent { .. })));

        let event = GameEvent::new("Storm", "", 1.0).with_choice(
            EventChoice::new("Hide", "").with_result(EventResult::new("Dry", -0.5)),
        );
        assert!(matches!(event.validate(), Err(EventError::MalformedEvent { .. })));
    }

    #[test]
    fn test_nan_weight_is_malformed() {
        let event = GameEvent::new("Storm", "", f64::NAN).with_choice(
            EventChoice::new("Hide", "").with_result(EventResult::new("Dry", 1.0)),
        );
        assert!(matches!(event.validate(), Err(EventError::MalformedEvent { .. })));
    }

    #[test]
    fn test_duplicate_choice_label_is_malformed() {
        let choice = EventChoice::new("Wait", "").with_result(EventResult::new("Nothing", 1.0));
        let event = GameEvent::new("Fog", "", 1.0)
            .with_choice(choice.clone())
            .with_choice(choice);
        assert!(matches!(event.validate(), Err(EventError::MalformedEvent { .. })));
    }

    #[test]
    fn test_event_without_choices_is_malformed() {
        let event = GameEvent::new("Empty", "", 1.0);
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_zero_weights_are_allowed() {
        let event = GameEvent::new("Quiet", "", 0.0).with_choice(
            EventChoice::new("Listen", "").with_result(EventResult::new("Silence", 0.0)),
        );
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_owns_choice() {
        let event = lost_your_bearings();
        assert!(event.owns_choice(&event.choices()[0]));

        let copy = event.choices()[1].clone();
        assert!(event.owns_choice(&copy));

        let foreign = EventChoice::new("Fly Away", "").with_result(EventResult::new("No", 1.0));
        assert!(!event.owns_choice(&foreign));
    }

    #[test]
    fn test_choice_lookup() {
        let event = lost_your_bearings();
        assert!(event.choice("Turn Back").is_some());
        assert!(event.choice("Dig In").is_none());
    }
}
