//! Configuration module for risk-matrix.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use risk_matrix::config::{load_or_default, Validatable};
//!
//! let (config, loaded_from) = load_or_default(None);
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.risk-matrix.yaml` file in your project root or `~/.config/risk-matrix/`:
//!
//! ```yaml
//! seed:
//!   risks:
//!     - description: Data centre outage
//!       level: high
//! tui:
//!   theme: light
//!   initial_view: graph
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_THEME, DEFAULT_TICK_RATE_MS, TICK_RATE_RANGE_MS, VALID_THEMES};
pub use types::{AppConfig, SeedConfig, SeedRisk, TuiConfig, TuiPreferences, ViewConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, ConfigFileError,
    CONFIG_FILE_NAMES,
};

use crate::matrix::RiskMatrix;

impl SeedConfig {
    /// Build the initial state store from the seeded risks.
    #[must_use]
    pub fn to_matrix(&self) -> RiskMatrix {
        RiskMatrix::from_entries(
            self.risks
                .iter()
                .map(|risk| (risk.description.clone(), risk.level)),
        )
    }
}

impl ViewConfig {
    /// Seeded matrix with the start filter and view mode applied.
    #[must_use]
    pub fn initial_matrix(&self) -> RiskMatrix {
        let mut matrix = self.app.seed.to_matrix();
        matrix.set_filter(self.effective_filter());
        matrix.set_view_mode(self.effective_view_mode());
        matrix
    }
}

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.risk-matrix.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
