//! Unified error types for risk-matrix.
//!
//! Lookups by id report [`RiskError::NotFound`] instead of failing silently;
//! the state is left untouched in that case, so callers that only care about
//! the happy path can discard the result.

use crate::model::RiskId;
use thiserror::Error;

/// Main error type for risk-matrix operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RiskError {
    /// No risk with the given id exists in the collection
    #[error("No risk with id {id}")]
    NotFound { id: RiskId },

    /// The largest id is already in use, so no new risk can be numbered
    #[error("No ids left after {last}")]
    IdsExhausted { last: RiskId },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Terminal setup, drawing or event polling failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl RiskError {
    /// Create a not-found error for `id`
    pub const fn not_found(id: RiskId) -> Self {
        Self::NotFound { id }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this is a lookup miss (as opposed to a real failure)
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenient Result type alias for risk-matrix operations.
pub type Result<T> = std::result::Result<T, RiskError>;
