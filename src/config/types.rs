//! Configuration types for risk-matrix.

use super::defaults::{DEFAULT_THEME, DEFAULT_TICK_RATE_MS};
use crate::model::{LevelFilter, RiskLevel, ViewMode};
use crate::reports::OutputFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loadable from a YAML file.
///
/// CLI arguments override individual fields; see [`ViewConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Risks present when the matrix opens
    pub seed: SeedConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Seed Risks
// ============================================================================

/// Initial risk collection. Ids are assigned 1..=n in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SeedConfig {
    pub risks: Vec<SeedRisk>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        let levels = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];
        let risks = (1..=6)
            .zip(levels.iter().cycle())
            .map(|(n, level)| SeedRisk {
                description: format!("Risk {n}"),
                level: *level,
            })
            .collect();
        Self { risks }
    }
}

/// A single seeded risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeedRisk {
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Severity: high, medium or low
    #[serde(default)]
    pub level: RiskLevel,
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 50, max = 5000))]
    pub tick_rate_ms: u64,
    /// View shown on startup
    pub initial_view: ViewMode,
    /// Filter applied on startup
    pub initial_filter: LevelFilter,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            mouse_enabled: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            initial_view: ViewMode::Matrix,
            initial_filter: LevelFilter::All,
        }
    }
}

/// Persistent TUI preferences (theme only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("risk-matrix").join("preferences.json"))
    }

    /// Load preferences from `path`, or return `None` if absent or unreadable.
    #[must_use]
    pub fn load_from(path: &Path) -> Option<Self> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Theme to start with: a saved preference wins over the configured one.
    #[must_use]
    pub fn resolve_theme(saved: Option<Self>, configured: &str) -> String {
        saved.map_or_else(|| configured.to_string(), |prefs| prefs.theme)
    }
}

// ============================================================================
// Command Configuration
// ============================================================================

/// Resolved configuration for the `view` command.
#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    /// Settings loaded from the config file (or defaults)
    pub app: AppConfig,
    /// Requested output format
    pub output: OutputFormat,
    /// Filter override from the command line
    pub filter: Option<LevelFilter>,
    /// View mode override from the command line
    pub view_mode: Option<ViewMode>,
    /// Disable ANSI colors in non-interactive output
    pub no_color: bool,
}

impl ViewConfig {
    /// Filter to start with: CLI override, else the configured one.
    #[must_use]
    pub fn effective_filter(&self) -> LevelFilter {
        self.filter.unwrap_or(self.app.tui.initial_filter)
    }

    /// View mode to start with: CLI override, else the configured one.
    #[must_use]
    pub fn effective_view_mode(&self) -> ViewMode {
        self.view_mode.unwrap_or(self.app.tui.initial_view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_matches_reference_rows() {
        let seed = SeedConfig::default();
        let rows: Vec<(&str, RiskLevel)> = seed
            .risks
            .iter()
            .map(|r| (r.description.as_str(), r.level))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Risk 1", RiskLevel::High),
                ("Risk 2", RiskLevel::Medium),
                ("Risk 3", RiskLevel::Low),
                ("Risk 4", RiskLevel::High),
                ("Risk 5", RiskLevel::Medium),
                ("Risk 6", RiskLevel::Low),
            ]
        );
    }

    #[test]
    fn test_view_config_overrides() {
        let mut config = ViewConfig::default();
        config.app.tui.initial_filter = LevelFilter::Only(RiskLevel::Low);
        config.app.tui.initial_view = ViewMode::Graph;
        assert_eq!(config.effective_filter(), LevelFilter::Only(RiskLevel::Low));
        assert_eq!(config.effective_view_mode(), ViewMode::Graph);

        config.filter = Some(LevelFilter::All);
        config.view_mode = Some(ViewMode::Matrix);
        assert_eq!(config.effective_filter(), LevelFilter::All);
        assert_eq!(config.effective_view_mode(), ViewMode::Matrix);
    }

    #[test]
    fn test_preferences_round_trip() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let path = tmp.path().join("nested").join("preferences.json");
        assert!(TuiPreferences::load_from(&path).is_none());

        let prefs = TuiPreferences {
            theme: "light".to_string(),
        };
        prefs.save_to(&path).expect("save");
        let loaded = TuiPreferences::load_from(&path).expect("load");
        assert_eq!(loaded.theme, "light");
    }

    #[test]
    fn test_saved_theme_overrides_configured() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let path = tmp.path().join("preferences.json");
        assert_eq!(
            TuiPreferences::resolve_theme(TuiPreferences::load_from(&path), "dark"),
            "dark"
        );

        TuiPreferences {
            theme: "high-contrast".to_string(),
        }
        .save_to(&path)
        .expect("save");
        assert_eq!(
            TuiPreferences::resolve_theme(TuiPreferences::load_from(&path), "dark"),
            "high-contrast"
        );
    }

    #[test]
    fn test_unreadable_preferences_are_ignored() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let path = tmp.path().join("preferences.json");
        std::fs::write(&path, "{ not json").expect("write");
        assert!(TuiPreferences::load_from(&path).is_none());
    }

    #[test]
    fn test_seed_risk_fields_default() {
        let risk: SeedRisk = serde_yaml::from_str("description: Outage").expect("parse");
        assert_eq!(risk.level, RiskLevel::Low);
        let risk: SeedRisk = serde_yaml::from_str("level: high").expect("parse");
        assert!(risk.description.is_empty());
    }
}
