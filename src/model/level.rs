//! Severity levels and the filter built on top of them.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity enumeration.
///
/// Declaration order is significant: it is the order of the filter cycle,
/// the order of the matrix columns and bar-chart bars, and the sort order
/// of risk rows (High before Medium before Low).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    #[default]
    Low,
}

impl RiskLevel {
    /// All levels in enumeration order.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Number of levels.
    pub const COUNT: usize = Self::ALL.len();

    /// Position in [`RiskLevel::ALL`] (High = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Inverse of [`RiskLevel::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Lowercase key used in config files and on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Next level in enumeration order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Previous level in enumeration order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown risk level '{0}' (expected high, medium or low)")]
pub struct ParseLevelError(pub String);

impl FromStr for RiskLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// Active filter: show everything, or exactly one level.
///
/// Serialized as a plain string: `all`, `high`, `medium` or `low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LevelFilter {
    #[default]
    All,
    Only(RiskLevel),
}

impl LevelFilter {
    /// Every filter value in display order (`All` first).
    pub const CHOICES: [Self; 4] = [
        Self::All,
        Self::Only(RiskLevel::High),
        Self::Only(RiskLevel::Medium),
        Self::Only(RiskLevel::Low),
    ];

    /// Whether a risk at `level` passes this filter.
    #[must_use]
    pub fn matches(self, level: RiskLevel) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == level,
        }
    }

    /// The selected level, if any.
    #[must_use]
    pub const fn level(self) -> Option<RiskLevel> {
        match self {
            Self::All => None,
            Self::Only(level) => Some(level),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(level) => level.label(),
        }
    }

    /// Index into [`LevelFilter::CHOICES`].
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::All => 0,
            Self::Only(level) => level.index() + 1,
        }
    }

    /// Next value in the cycle `All → High → Medium → Low → All`.
    #[must_use]
    pub fn next(self) -> Self {
        Self::CHOICES[(self.position() + 1) % Self::CHOICES.len()]
    }

    /// Previous value in the cycle.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::CHOICES[(self.position() + Self::CHOICES.len() - 1) % Self::CHOICES.len()]
    }
}

impl From<Option<RiskLevel>> for LevelFilter {
    fn from(level: Option<RiskLevel>) -> Self {
        level.map_or(Self::All, Self::Only)
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for LevelFilter {
    type Error = ParseLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LevelFilter> for String {
    fn from(filter: LevelFilter) -> Self {
        match filter {
            LevelFilter::All => "all".to_string(),
            LevelFilter::Only(level) => level.key().to_string(),
        }
    }
}

impl JsonSchema for LevelFilter {
    fn schema_name() -> String {
        "LevelFilter".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        let mut schema = String::json_schema(gen).into_object();
        schema.enum_values = Some(
            ["all", "high", "medium", "low"]
                .into_iter()
                .map(serde_json::Value::from)
                .collect(),
        );
        schema.into()
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_follows_declaration_order() {
        for (i, level) in RiskLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
            assert_eq!(RiskLevel::from_index(i), Some(*level));
        }
        assert_eq!(RiskLevel::from_index(3), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("HIGH".parse::<RiskLevel>(), Ok(RiskLevel::High));
        assert_eq!(" medium ".parse::<RiskLevel>(), Ok(RiskLevel::Medium));
        assert_eq!("Low".parse::<RiskLevel>(), Ok(RiskLevel::Low));
        assert!("critical".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_level_cycle_wraps() {
        assert_eq!(RiskLevel::High.next(), RiskLevel::Medium);
        assert_eq!(RiskLevel::Low.next(), RiskLevel::High);
        assert_eq!(RiskLevel::High.prev(), RiskLevel::Low);
    }

    #[test]
    fn test_default_level_is_low() {
        assert_eq!(RiskLevel::default(), RiskLevel::Low);
    }

    #[test]
    fn test_filter_cycle() {
        let mut filter = LevelFilter::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(filter);
            filter = filter.next();
        }
        assert_eq!(seen, LevelFilter::CHOICES.to_vec());
        assert_eq!(filter, LevelFilter::All);
        assert_eq!(LevelFilter::All.prev(), LevelFilter::Only(RiskLevel::Low));
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("".parse::<LevelFilter>(), Ok(LevelFilter::All));
        assert_eq!("all".parse::<LevelFilter>(), Ok(LevelFilter::All));
        assert_eq!(
            "medium".parse::<LevelFilter>(),
            Ok(LevelFilter::Only(RiskLevel::Medium))
        );
        assert!("urgent".parse::<LevelFilter>().is_err());
    }

    #[test]
    fn test_filter_reads_plain_strings_from_yaml() {
        let all: LevelFilter = serde_yaml::from_str("all").expect("parse all");
        assert_eq!(all, LevelFilter::All);
        let high: LevelFilter = serde_yaml::from_str("high").expect("parse high");
        assert_eq!(high, LevelFilter::Only(RiskLevel::High));
        assert!(serde_yaml::from_str::<LevelFilter>("severe").is_err());
        assert_eq!(
            serde_yaml::to_string(&LevelFilter::Only(RiskLevel::Low))
                .expect("serialize")
                .trim(),
            "low"
        );
    }
}
