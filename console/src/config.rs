//! Console configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::store::SortDirection;

/// Errors raised while interpreting configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `initial_sort` is neither `asc` nor `desc`.
    #[error("invalid initial sort direction {value:?}: expected `asc` or `desc`")]
    InvalidSortDirection {
        /// Rejected value.
        value: String,
    },
}

/// Process configuration for the console.
///
/// Values come from `ADMIN_CONSOLE_*` environment variables or a
/// configuration file. None of them affect the fixed defaults that a
/// settings reset restores.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ADMIN_CONSOLE")]
pub struct ConsoleSettings {
    /// Start with the ten example users.
    pub seed_example_users: Option<bool>,
    /// Emit logs as JSON lines.
    pub json_logs: Option<bool>,
    /// Initial user list direction, `asc` or `desc`.
    pub initial_sort: Option<String>,
}

impl ConsoleSettings {
    /// Return whether to seed the example users, falling back to `true`.
    #[must_use]
    pub const fn seed_example_users(&self) -> bool {
        !matches!(self.seed_example_users, Some(false))
    }

    /// Return whether logs are emitted as JSON, falling back to `false`.
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self.json_logs, Some(true))
    }

    /// Return the configured sort direction, falling back to ascending.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSortDirection`] for any other value.
    pub fn initial_sort(&self) -> Result<SortDirection, ConfigError> {
        self.initial_sort.as_deref().map_or(Ok(SortDirection::default()), |value| {
            value
                .parse()
                .map_err(|_| ConfigError::InvalidSortDirection {
                    value: value.to_owned(),
                })
        })
    }
}
