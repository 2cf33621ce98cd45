//! **An interactive risk matrix for the terminal.**
//!
//! `risk-matrix` keeps a small collection of risks, each with a description
//! and a severity level (High, Medium or Low), and shows them either as an
//! editable matrix (one radio column per level) or as a bar chart of the
//! per-level counts together with the greatest risk level present.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the plain data types: [`RiskLevel`], [`LevelFilter`],
//!   [`ViewMode`], [`Risk`] and [`RiskId`].
//! - **[`matrix`]**: [`RiskMatrix`], the single owned state store, its typed
//!   mutations, and the derivation pipeline (filter, stable sort by level,
//!   per-level counts, greatest level) behind [`DerivedView`].
//! - **[`config`]**: YAML configuration with the seed risks and UI
//!   preferences, discovery, validation and JSON schema generation.
//! - **[`reports`]**: the plain-text summary used when stdout is not a
//!   terminal.
//! - **[`tui`]**: the interactive ratatui front end.
//! - **[`cli`]**: command handlers used by the binary.
//!
//! ## Getting Started
//!
//! ```
//! use risk_matrix::{LevelFilter, RiskLevel, RiskMatrix};
//!
//! let mut matrix = RiskMatrix::from_entries([
//!     ("Supplier insolvency", RiskLevel::Medium),
//!     ("Data centre outage", RiskLevel::High),
//!     ("Key staff leave", RiskLevel::Medium),
//! ]);
//!
//! let id = matrix.add_risk()?;
//! matrix.set_description(id, "Regulatory change")?;
//! matrix.set_filter(LevelFilter::Only(RiskLevel::Medium));
//!
//! let view = matrix.derive();
//! assert_eq!(view.counts.total(), 2);
//! assert_eq!(view.greatest, RiskLevel::Medium);
//! # Ok::<(), risk_matrix::RiskError>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `risk-matrix` binary opens the TUI with `risk-matrix view`; run
//! `risk-matrix --help` for the full command list.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // usize↔u16/u64 casts are pervasive in TUI layout math; values are small
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod matrix;
pub mod model;
pub mod reports;
pub mod tui;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, SeedConfig, SeedRisk, TuiConfig, ViewConfig};
pub use config::{ConfigError, Validatable};
pub use error::{Result, RiskError};
pub use matrix::{DerivedView, LevelCounts, RiskMatrix};
pub use model::{LevelFilter, Risk, RiskId, RiskLevel, ViewMode};
pub use reports::{OutputFormat, SummaryReporter};

// TUI building blocks
pub use tui::{ListNavigation, RowCursor, StatusMessage};
