//! Settings page form controller.
//!
//! Stages edits to the settings record and the theme preference together in
//! one [`SettingsDraft`]. Dirtiness is a comparison against the live stores,
//! so it clears on its own when an edit is undone by hand.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::notification::{SETTINGS_RESET_MESSAGE, SETTINGS_SAVED_MESSAGE};
use crate::domain::{
    Notice, Notifier, SessionTimeout, Settings, SettingsPatch, SettingsValidationError, ThemeMode,
    ThemePreference,
};
use crate::store::{SettingsStore, ThemeStore};

/// One edit reported by the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SettingsChange {
    /// Application name text.
    AppName(String),
    /// Email notifications toggle.
    Notifications(bool),
    /// Maintenance mode toggle.
    MaintenanceMode(bool),
    /// Session timeout slider, in minutes.
    SessionTimeout(u32),
    /// Two-factor toggle.
    TwoFactorAuth(bool),
    /// Light/dark switch.
    ThemeMode(ThemeMode),
    /// Primary colour picker.
    PrimaryColor(String),
    /// Secondary colour picker.
    SecondaryColor(String),
}

/// Errors raised by the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsFormError {
    /// A staged value failed validation; the draft is unchanged.
    #[error(transparent)]
    Invalid(#[from] SettingsValidationError),
    /// Save was requested with no staged changes.
    #[error("there are no unsaved settings changes")]
    NothingToSave,
}

/// Working copy of everything the settings page edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDraft {
    /// Staged application settings.
    pub settings: Settings,
    /// Staged palette.
    pub theme: ThemePreference,
}

impl SettingsDraft {
    fn from_live(settings: &SettingsStore, theme: &ThemeStore) -> Self {
        Self {
            settings: settings.get().clone(),
            theme: theme.get().clone(),
        }
    }
}

/// Read model for rendering the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFormView {
    /// Values to display.
    pub draft: SettingsDraft,
    /// Whether the draft differs from the live stores.
    pub dirty: bool,
    /// Whether the save action is enabled.
    pub can_save: bool,
}

/// Transient state of the mounted settings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    draft: SettingsDraft,
}

impl SettingsForm {
    /// Seed the draft from the live stores.
    #[must_use]
    pub fn mount(settings: &SettingsStore, theme: &ThemeStore) -> Self {
        Self {
            draft: SettingsDraft::from_live(settings, theme),
        }
    }

    /// Staged values.
    #[must_use]
    pub const fn draft(&self) -> &SettingsDraft {
        &self.draft
    }

    /// Stage one edit. Nothing is written to the stores.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsFormError::Invalid`] for a session timeout outside
    /// 5 to 120 minutes or off the 5 minute grid. The draft keeps its
    /// previous value.
    pub fn apply(&mut self, change: SettingsChange) -> Result<(), SettingsFormError> {
        let settings = &mut self.draft.settings;
        let theme = &mut self.draft.theme;
        match change {
            SettingsChange::AppName(value) => settings.app_name = value,
            SettingsChange::Notifications(value) => settings.notifications = value,
            SettingsChange::MaintenanceMode(value) => settings.maintenance_mode = value,
            SettingsChange::SessionTimeout(minutes) => {
                settings.session_timeout = SessionTimeout::new(minutes).inspect_err(|err| {
                    warn!(minutes, error = %err, "session timeout rejected");
                })?;
            }
            SettingsChange::TwoFactorAuth(value) => settings.two_factor_auth = value,
            SettingsChange::ThemeMode(mode) => theme.mode = mode,
            SettingsChange::PrimaryColor(value) => theme.primary_color = value,
            SettingsChange::SecondaryColor(value) => theme.secondary_color = value,
        }
        debug!("settings draft changed");
        Ok(())
    }

    /// Whether the draft differs from the live stores.
    #[must_use]
    pub fn is_dirty(&self, settings: &SettingsStore, theme: &ThemeStore) -> bool {
        self.draft.settings != *settings.get() || self.draft.theme != *theme.get()
    }

    /// Commit the draft to both stores and emit a success notice.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsFormError::NothingToSave`] when the draft is clean.
    pub fn save(
        &self,
        settings: &mut SettingsStore,
        theme: &mut ThemeStore,
        notifier: &mut impl Notifier,
    ) -> Result<(), SettingsFormError> {
        if !self.is_dirty(settings, theme) {
            warn!("settings save rejected: draft is clean");
            return Err(SettingsFormError::NothingToSave);
        }
        settings.update(SettingsPatch::from(self.draft.settings.clone()));
        theme.replace(self.draft.theme.clone());
        info!("settings saved");
        notifier.notify(Notice::success(SETTINGS_SAVED_MESSAGE));
        Ok(())
    }

    /// Restore both stores to their defaults, resync the draft from them,
    /// and emit an info notice.
    ///
    /// Staged edits are dropped along with the live values.
    pub fn reset(
        &mut self,
        settings: &mut SettingsStore,
        theme: &mut ThemeStore,
        notifier: &mut impl Notifier,
    ) {
        settings.reset();
        theme.reset();
        self.draft = SettingsDraft::from_live(settings, theme);
        info!("settings reset");
        notifier.notify(Notice::info(SETTINGS_RESET_MESSAGE));
    }

    /// Drop staged edits by resyncing from the live stores.
    pub fn discard(&mut self, settings: &SettingsStore, theme: &ThemeStore) {
        self.draft = SettingsDraft::from_live(settings, theme);
        debug!("settings draft discarded");
    }

    /// Read model for rendering.
    #[must_use]
    pub fn view(&self, settings: &SettingsStore, theme: &ThemeStore) -> SettingsFormView {
        let dirty = self.is_dirty(settings, theme);
        SettingsFormView {
            draft: self.draft.clone(),
            dirty,
            can_save: dirty,
        }
    }
}
