//! Derived views over a risk collection.
//!
//! The pipeline is `filter → sort → count → greatest`. Every step is a pure
//! function of its input and the whole thing is recomputed on each call; the
//! collections involved are small and change only on user input.

use crate::model::{LevelFilter, Risk, RiskId, RiskLevel};

/// Risks passing `filter`, in their original relative order.
pub fn filter_risks(risks: &[Risk], filter: LevelFilter) -> Vec<&Risk> {
    risks
        .iter()
        .filter(|risk| filter.matches(risk.level))
        .collect()
}

/// Stable sort by position of each risk's level in [`RiskLevel::ALL`].
///
/// Risks sharing a level keep their input order.
pub fn sort_by_level<'a>(risks: &[&'a Risk]) -> Vec<&'a Risk> {
    let mut sorted = risks.to_vec();
    // `sort_by_key` is stable
    sorted.sort_by_key(|risk| risk.level.index());
    sorted
}

/// Number of risks at each level, indexed in enumeration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts([usize; RiskLevel::COUNT]);

impl LevelCounts {
    #[must_use]
    pub const fn get(&self, level: RiskLevel) -> usize {
        self.0[level.index()]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Largest single count (0 when empty).
    #[must_use]
    pub fn max(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// `(level, count)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (RiskLevel, usize)> + '_ {
        RiskLevel::ALL.into_iter().map(|level| (level, self.get(level)))
    }

    #[must_use]
    pub const fn as_array(&self) -> [usize; RiskLevel::COUNT] {
        self.0
    }
}

/// Tally `risks` per level.
pub fn count_by_level<'a>(risks: impl IntoIterator<Item = &'a Risk>) -> LevelCounts {
    let mut counts = [0usize; RiskLevel::COUNT];
    for risk in risks {
        counts[risk.level.index()] += 1;
    }
    LevelCounts(counts)
}

/// Level with the highest count.
///
/// Ties resolve to the earliest level in enumeration order, so an all-zero
/// tally yields [`RiskLevel::High`].
#[must_use]
pub fn greatest_risk(counts: &LevelCounts) -> RiskLevel {
    let max = counts.max();
    counts
        .iter()
        .find(|&(_, count)| count == max)
        .map_or(RiskLevel::ALL[0], |(level, _)| level)
}

/// Everything the renderers need, computed from one snapshot of state.
#[derive(Debug, Clone)]
pub struct DerivedView<'a> {
    pub filtered: Vec<&'a Risk>,
    pub sorted: Vec<&'a Risk>,
    pub counts: LevelCounts,
    pub greatest: RiskLevel,
}

impl<'a> DerivedView<'a> {
    /// Run the full pipeline.
    pub fn compute(risks: &'a [Risk], filter: LevelFilter) -> Self {
        let filtered = filter_risks(risks, filter);
        let sorted = sort_by_level(&filtered);
        let counts = count_by_level(sorted.iter().copied());
        let greatest = greatest_risk(&counts);
        Self {
            filtered,
            sorted,
            counts,
            greatest,
        }
    }

    /// Number of displayed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The risk shown at display row `row`.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&'a Risk> {
        self.sorted.get(row).copied()
    }

    /// Display row of the risk with `id`, if it is visible.
    #[must_use]
    pub fn position_of(&self, id: RiskId) -> Option<usize> {
        self.sorted.iter().position(|risk| risk.id == id)
    }
}
