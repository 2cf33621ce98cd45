//! Risk matrix state and the views derived from it.
//!
//! [`RiskMatrix`] holds the risk collection, the active [`LevelFilter`]
//! and the [`ViewMode`]. [`DerivedView`] is recomputed from it whenever a
//! renderer needs to draw:
//!
//! ```
//! use risk_matrix::matrix::RiskMatrix;
//! use risk_matrix::model::{LevelFilter, RiskLevel};
//!
//! let mut matrix = RiskMatrix::from_entries([
//!     ("Vendor lock-in", RiskLevel::Low),
//!     ("Data loss", RiskLevel::High),
//! ]);
//! matrix.set_filter(LevelFilter::All);
//!
//! let view = matrix.derive();
//! assert_eq!(view.sorted[0].description, "Data loss");
//! assert_eq!(view.greatest, RiskLevel::High);
//! ```
//!
//! [`LevelFilter`]: crate::model::LevelFilter
//! [`ViewMode`]: crate::model::ViewMode

mod derive;
mod state;

pub use derive::{
    count_by_level, filter_risks, greatest_risk, sort_by_level, DerivedView, LevelCounts,
};
pub use state::RiskMatrix;
