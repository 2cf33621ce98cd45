//! Default values shared by the config types and validation.

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "dark";

/// Theme names accepted in config files and preferences.
pub const VALID_THEMES: [&str; 3] = ["dark", "light", "high-contrast"];

/// Default event poll interval for the TUI loop.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Accepted range for `tui.tick_rate_ms`.
pub const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 50..=5000;
