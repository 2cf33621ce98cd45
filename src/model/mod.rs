//! Core data model: severity levels, filters, view modes and risk records.
//!
//! Everything here is plain data. State transitions live in
//! [`crate::matrix`], rendering in [`crate::tui`] and [`crate::reports`].

mod level;
mod risk;

pub use level::{LevelFilter, ParseLevelError, RiskLevel};
pub use risk::{next_risk_id, Risk, RiskId};

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which representation of the derived view is shown.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Grid with one row per risk and one column per level
    #[default]
    Matrix,
    /// Bar chart of per-level counts
    Graph,
}

impl ViewMode {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Matrix => Self::Graph,
            Self::Graph => Self::Matrix,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Matrix => "Matrix",
            Self::Graph => "Graph",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
