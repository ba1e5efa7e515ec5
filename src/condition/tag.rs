//! Condition tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named boolean predicate an event can require.
///
/// Tags carry no payload; their meaning lives entirely in
/// [`matches`](crate::condition::matches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Player has an impairing status effect active
    Impaired,
    /// Player is out on an expedition
    IsExpedition,
    /// Player is clumsy
    Clumsy,
    /// Player is working around camp
    IsCampWork,
    /// Player is limping
    Limping,
}

impl Condition {
    /// Every tag, in declaration order
    pub const ALL: [Condition; 5] = [
        Condition::Impaired,
        Condition::IsExpedition,
        Condition::Clumsy,
        Condition::IsCampWork,
        Condition::Limping,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Condition::Impaired => "Impaired",
            Condition::IsExpedition => "IsExpedition",
            Condition::Clumsy => "Clumsy",
            Condition::IsCampWork => "IsCampWork",
            Condition::Limping => "Limping",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
