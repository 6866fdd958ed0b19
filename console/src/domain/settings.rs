//! Application settings record.
//!
//! One [`Settings`] instance lives for the whole process inside the settings
//! store. [`Settings::default`] is the fixed record that reset restores.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest allowed session timeout in minutes.
pub const SESSION_TIMEOUT_MIN: u32 = 5;
/// Longest allowed session timeout in minutes.
pub const SESSION_TIMEOUT_MAX: u32 = 120;
/// Granularity of the session timeout in minutes.
pub const SESSION_TIMEOUT_STEP: u32 = 5;
/// Session timeout of the default record.
pub const DEFAULT_SESSION_TIMEOUT: u32 = 30;
/// Application name of the default record.
pub const DEFAULT_APP_NAME: &str = "Admin Dashboard";

/// Validation errors for settings values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsValidationError {
    /// The timeout is outside the allowed range.
    #[error("session timeout must be between {min} and {max} minutes, got {actual}")]
    SessionTimeoutOutOfRange {
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
        /// Rejected value.
        actual: u32,
    },
    /// The timeout is not a multiple of the step.
    #[error("session timeout must be a multiple of {step} minutes, got {actual}")]
    SessionTimeoutOffStep {
        /// Required step.
        step: u32,
        /// Rejected value.
        actual: u32,
    },
}

/// Idle session timeout in minutes: 5 to 120 inclusive, in steps of 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SessionTimeout(u32);

impl SessionTimeout {
    /// Validate and wrap a timeout in minutes.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsValidationError`] when `minutes` is out of range or
    /// not a multiple of [`SESSION_TIMEOUT_STEP`].
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_console::domain::SessionTimeout;
    ///
    /// assert!(SessionTimeout::new(45).is_ok());
    /// assert!(SessionTimeout::new(47).is_err());
    /// assert!(SessionTimeout::new(125).is_err());
    /// ```
    pub const fn new(minutes: u32) -> Result<Self, SettingsValidationError> {
        if minutes < SESSION_TIMEOUT_MIN || minutes > SESSION_TIMEOUT_MAX {
            return Err(SettingsValidationError::SessionTimeoutOutOfRange {
                min: SESSION_TIMEOUT_MIN,
                max: SESSION_TIMEOUT_MAX,
                actual: minutes,
            });
        }
        if !minutes.is_multiple_of(SESSION_TIMEOUT_STEP) {
            return Err(SettingsValidationError::SessionTimeoutOffStep {
                step: SESSION_TIMEOUT_STEP,
                actual: minutes,
            });
        }
        Ok(Self(minutes))
    }

    /// Timeout in minutes.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }
}

impl Default for SessionTimeout {
    fn default() -> Self {
        Self(DEFAULT_SESSION_TIMEOUT)
    }
}

impl TryFrom<u32> for SessionTimeout {
    type Error = SettingsValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionTimeout> for u32 {
    fn from(value: SessionTimeout) -> Self {
        value.0
    }
}

/// Application configuration edited on the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Name shown in the navigation chrome.
    pub app_name: String,
    /// Whether email notifications are sent.
    pub notifications: bool,
    /// Whether the application is in maintenance mode.
    pub maintenance_mode: bool,
    /// Idle session timeout.
    pub session_timeout: SessionTimeout,
    /// Whether two-factor authentication is required.
    pub two_factor_auth: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_owned(),
            notifications: true,
            maintenance_mode: false,
            session_timeout: SessionTimeout::default(),
            two_factor_auth: true,
        }
    }
}

impl Settings {
    /// Shallow-merge every field present in `patch`.
    pub fn merge(&mut self, patch: SettingsPatch) {
        let SettingsPatch {
            app_name,
            notifications,
            maintenance_mode,
            session_timeout,
            two_factor_auth,
        } = patch;
        if let Some(value) = app_name {
            self.app_name = value;
        }
        if let Some(value) = notifications {
            self.notifications = value;
        }
        if let Some(value) = maintenance_mode {
            self.maintenance_mode = value;
        }
        if let Some(value) = session_timeout {
            self.session_timeout = value;
        }
        if let Some(value) = two_factor_auth {
            self.two_factor_auth = value;
        }
    }

    /// Number of fields that differ from [`Settings::default`].
    #[must_use]
    pub fn customised_fields(&self) -> usize {
        let defaults = Self::default();
        [
            self.app_name != defaults.app_name,
            self.notifications != defaults.notifications,
            self.maintenance_mode != defaults.maintenance_mode,
            self.session_timeout != defaults.session_timeout,
            self.two_factor_auth != defaults.two_factor_auth,
        ]
        .into_iter()
        .filter(|changed| *changed)
        .count()
    }
}

/// Partial settings update; `None` fields are left untouched.
///
/// # Examples
///
/// ```
/// use admin_console::domain::{SessionTimeout, Settings, SettingsPatch};
///
/// let mut settings = Settings::default();
/// settings.merge(SettingsPatch {
///     session_timeout: Some(SessionTimeout::new(45).expect("valid timeout")),
///     ..SettingsPatch::default()
/// });
/// assert_eq!(settings.session_timeout.minutes(), 45);
/// assert_eq!(settings.app_name, "Admin Dashboard");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    /// New application name.
    pub app_name: Option<String>,
    /// New notifications flag.
    pub notifications: Option<bool>,
    /// New maintenance mode flag.
    pub maintenance_mode: Option<bool>,
    /// New session timeout.
    pub session_timeout: Option<SessionTimeout>,
    /// New two-factor flag.
    pub two_factor_auth: Option<bool>,
}

impl SettingsPatch {
    /// Whether the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.app_name.is_none()
            && self.notifications.is_none()
            && self.maintenance_mode.is_none()
            && self.session_timeout.is_none()
            && self.two_factor_auth.is_none()
    }
}

impl From<Settings> for SettingsPatch {
    fn from(value: Settings) -> Self {
        Self {
            app_name: Some(value.app_name),
            notifications: Some(value.notifications),
            maintenance_mode: Some(value.maintenance_mode),
            session_timeout: Some(value.session_timeout),
            two_factor_auth: Some(value.two_factor_auth),
        }
    }
}
