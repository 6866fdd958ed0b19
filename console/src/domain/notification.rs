//! Transient notices for the toast collaborator.

use serde::{Deserialize, Serialize};

/// Notice emitted after the settings draft is saved.
pub const SETTINGS_SAVED_MESSAGE: &str = "Settings saved successfully!";
/// Notice emitted after settings are reset to defaults.
pub const SETTINGS_RESET_MESSAGE: &str = "Settings reset to default values!";

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// An action completed.
    Success,
    /// Neutral information.
    Info,
}

/// A message shown once; no acknowledgement is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Text to display.
    pub message: String,
    /// Presentation hint.
    pub severity: Severity,
}

impl Notice {
    /// Build a notice.
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Build a [`Severity::Success`] notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    /// Build a [`Severity::Info`] notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}
