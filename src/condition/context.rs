//! Concrete context snapshot

use crate::condition::evaluator::ConditionContext;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// What the player is currently doing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    #[default]
    Resting,
    Traveling,
    Expedition,
    CampWork,
}

/// Status effect flags visible to condition checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFlag {
    Concussed,
    Intoxicated,
    Hypothermic,
    Exhausted,
    Clumsy,
    SprainedAnkle,
    BrokenLeg,
}

impl StatusFlag {
    /// Statuses that count towards [`Condition::Impaired`](crate::condition::Condition::Impaired)
    #[inline]
    pub fn is_impairing(self) -> bool {
        matches!(
            self,
            StatusFlag::Concussed
                | StatusFlag::Intoxicated
                | StatusFlag::Hypothermic
                | StatusFlag::Exhausted
        )
    }

    #[inline]
    pub fn causes_limp(self) -> bool {
        matches!(self, StatusFlag::SprainedAnkle | StatusFlag::BrokenLeg)
    }
}

/// Read-only snapshot of the player state that conditions care about.
///
/// Games with richer world state implement [`ConditionContext`] directly on
/// their own types; this one covers the common case and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextSnapshot {
    pub activity: Activity,
    #[serde(default)]
    pub statuses: SmallVec<[StatusFlag; 4]>,
}

impl ContextSnapshot {
    pub fn new(activity: Activity) -> Self {
        Self {
            activity,
            statuses: SmallVec::new(),
        }
    }

    /// Add a status flag. Duplicates are ignored.
    pub fn with_status(mut self, status: StatusFlag) -> Self {
        if !self.statuses.contains(&status) {
            self.statuses.push(status);
        }
        self
    }

    #[inline]
    pub fn has_status(&self, status: StatusFlag) -> bool {
        self.statuses.contains(&status)
    }
}

impl ConditionContext for ContextSnapshot {
    fn is_impaired(&self) -> bool {
        self.statuses.iter().any(|s| s.is_impairing())
    }

    fn is_on_expedition(&self) -> bool {
        self.activity == Activity::Expedition
    }

    fn is_clumsy(&self) -> bool {
        self.has_status(StatusFlag::Clumsy)
    }

    fn is_doing_camp_work(&self) -> bool {
        self.activity == Activity::CampWork
    }

    fn is_limping(&self) -> bool {
        self.statuses.iter().any(|s| s.causes_limp())
    }
}
