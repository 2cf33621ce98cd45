//! The state store behind the widget.

use super::derive::DerivedView;
use crate::error::{Result, RiskError};
use crate::model::{next_risk_id, LevelFilter, Risk, RiskId, RiskLevel, ViewMode};

/// Risk collection plus the view-state that shapes how it is displayed.
///
/// Owned by a single UI instance. Mutations are synchronous and every
/// derived view is recomputed from scratch via [`RiskMatrix::derive`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskMatrix {
    risks: Vec<Risk>,
    filter: LevelFilter,
    view_mode: ViewMode,
}

impl RiskMatrix {
    /// An empty matrix with no filter in matrix mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from existing risks.
    ///
    /// Returns a config error if two risks share an id.
    pub fn with_risks(risks: Vec<Risk>) -> Result<Self> {
        let mut seen = std::collections::HashSet::with_capacity(risks.len());
        if let Some(dup) = risks.iter().find(|risk| !seen.insert(risk.id)) {
            return Err(RiskError::config(format!("duplicate risk id {}", dup.id)));
        }
        Ok(Self {
            risks,
            ..Self::default()
        })
    }

    /// Build from `(description, level)` pairs, numbering ids from 1.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, RiskLevel)>,
        S: Into<String>,
    {
        let risks = entries
            .into_iter()
            .zip(1u32..)
            .map(|((description, level), id)| Risk::new(RiskId(id), description, level))
            .collect();
        Self {
            risks,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn risks(&self) -> &[Risk] {
        &self.risks
    }

    #[must_use]
    pub fn risk(&self, id: RiskId) -> Option<&Risk> {
        self.risks.iter().find(|risk| risk.id == id)
    }

    #[must_use]
    pub const fn filter(&self) -> LevelFilter {
        self.filter
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.risks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.risks.is_empty()
    }

    /// Filtered, sorted and tallied view of the current state.
    #[must_use]
    pub fn derive(&self) -> DerivedView<'_> {
        DerivedView::compute(&self.risks, self.filter)
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: LevelFilter) {
        tracing::debug!(%filter, "filter changed");
        self.filter = filter;
    }

    /// Set the view mode directly.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Flip between matrix and graph mode; returns the new mode.
    pub fn toggle_view(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggle();
        tracing::debug!(mode = %self.view_mode, "view toggled");
        self.view_mode
    }

    fn risk_mut(&mut self, id: RiskId) -> Result<&mut Risk> {
        self.risks
            .iter_mut()
            .find(|risk| risk.id == id)
            .ok_or(RiskError::not_found(id))
    }

    /// Change the level of risk `id`. The collection is untouched on a miss.
    pub fn set_level(&mut self, id: RiskId, level: RiskLevel) -> Result<()> {
        let risk = self.risk_mut(id)?;
        risk.level = level;
        tracing::debug!(%id, %level, "risk level set");
        Ok(())
    }

    /// Replace the description of risk `id`. No content validation.
    pub fn set_description(&mut self, id: RiskId, text: impl Into<String>) -> Result<()> {
        let risk = self.risk_mut(id)?;
        risk.description = text.into();
        Ok(())
    }

    /// Append a blank risk at the lowest level and return its id.
    ///
    /// Fails without touching the collection when the largest id is
    /// already `u32::MAX`.
    pub fn add_risk(&mut self) -> Result<RiskId> {
        let id = next_risk_id(&self.risks).ok_or(RiskError::IdsExhausted {
            last: RiskId(u32::MAX),
        })?;
        self.risks.push(Risk::blank(id));
        tracing::debug!(%id, "risk added");
        Ok(id)
    }

    /// Delete risk `id`, returning it.
    pub fn remove_risk(&mut self, id: RiskId) -> Result<Risk> {
        let index = self
            .risks
            .iter()
            .position(|risk| risk.id == id)
            .ok_or(RiskError::not_found(id))?;
        tracing::debug!(%id, "risk removed");
        Ok(self.risks.remove(index))
    }
}
