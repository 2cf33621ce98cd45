//! Configuration validation for risk-matrix.
//!
//! Provides validation traits and implementations for all configuration types.

use super::defaults::{TICK_RATE_RANGE_MS, VALID_THEMES};
use super::types::{AppConfig, SeedConfig, TuiConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.seed.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for SeedConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Levels are checked by serde; descriptions are free-form
        Vec::new()
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !VALID_THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            });
        }

        if !TICK_RATE_RANGE_MS.contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between {} and {} ms, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    self.tick_rate_ms
                ),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_theme() {
        let config = TuiConfig {
            theme: "neon".to_string(),
            ..TuiConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tui.theme");
        assert!(errors[0].message.contains("high-contrast"));
    }

    #[test]
    fn test_tick_rate_bounds() {
        let too_fast = TuiConfig {
            tick_rate_ms: 10,
            ..TuiConfig::default()
        };
        assert!(!too_fast.is_valid());

        let edge = TuiConfig {
            tick_rate_ms: 5000,
            ..TuiConfig::default()
        };
        assert!(edge.is_valid());
    }

    #[test]
    fn test_app_config_collects_nested_errors() {
        let mut config = AppConfig::default();
        config.tui.theme = "sepia".to_string();
        config.tui.tick_rate_ms = 0;
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.to_string().starts_with("tui.tick_rate_ms:")));
    }
}
