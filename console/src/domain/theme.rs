//! Theme preference record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseEnumError;

/// Primary colour of the default theme.
pub const DEFAULT_PRIMARY_COLOR: &str = "#1976d2";
/// Secondary colour of the default theme.
pub const DEFAULT_SECONDARY_COLOR: &str = "#dc004e";

/// Light or dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// Stable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseEnumError::new("theme mode", s)),
        }
    }
}

/// Palette selection. Colours are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    /// Light or dark palette.
    pub mode: ThemeMode,
    /// Primary colour string.
    pub primary_color: String,
    /// Secondary colour string.
    pub secondary_color: String,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            primary_color: DEFAULT_PRIMARY_COLOR.to_owned(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_owned(),
        }
    }
}

impl ThemePreference {
    /// Number of fields that differ from [`ThemePreference::default`].
    #[must_use]
    pub fn customised_fields(&self) -> usize {
        let defaults = Self::default();
        [
            self.mode != defaults.mode,
            self.primary_color != defaults.primary_color,
            self.secondary_color != defaults.secondary_color,
        ]
        .into_iter()
        .filter(|changed| *changed)
        .count()
    }
}
