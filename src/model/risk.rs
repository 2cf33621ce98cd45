//! Risk records.

use super::RiskLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a risk, unique within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskId(pub u32);

impl RiskId {
    /// Id given to the first risk of an empty collection.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The id following this one, or `None` past `u32::MAX`.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl fmt::Display for RiskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for RiskId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single risk row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub id: RiskId,
    pub description: String,
    pub level: RiskLevel,
}

impl Risk {
    pub fn new(id: RiskId, description: impl Into<String>, level: RiskLevel) -> Self {
        Self {
            id,
            description: description.into(),
            level,
        }
    }

    /// A freshly added row: empty description, lowest level.
    #[must_use]
    pub fn blank(id: RiskId) -> Self {
        Self::new(id, String::new(), RiskLevel::default())
    }
}

/// Id for a new risk appended to `risks`: one past the largest id in use,
/// or [`RiskId::FIRST`] when empty. Gaps left by removals are not reused.
///
/// Returns `None` once the largest id is `u32::MAX`.
#[must_use]
pub fn next_risk_id(risks: &[Risk]) -> Option<RiskId> {
    match risks.iter().map(|risk| risk.id).max() {
        Some(max) => max.successor(),
        None => Some(RiskId::FIRST),
    }
}
