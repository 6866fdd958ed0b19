//! Application settings store.

use tracing::{debug, info};

use super::subscribers::{SubscriptionId, Subscribers};
use crate::domain::{Settings, SettingsPatch, StoreChange, StoreListener};

/// Owns the single live [`Settings`] record.
#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: Settings,
    subscribers: Subscribers,
}

impl SettingsStore {
    /// A store holding the default record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `settings`.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            subscribers: Subscribers::default(),
        }
    }

    /// Register a listener for [`StoreChange::Settings`].
    pub fn subscribe(&mut self, listener: Box<dyn StoreListener>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// The live record.
    #[must_use]
    pub const fn get(&self) -> &Settings {
        &self.settings
    }

    /// Merge `patch` into the live record.
    ///
    /// Returns whether anything changed. Listeners are only told about
    /// effective changes.
    pub fn update(&mut self, patch: SettingsPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        let mut next = self.settings.clone();
        next.merge(patch);
        if next == self.settings {
            debug!("settings patch matched live record");
            return false;
        }
        self.settings = next;
        info!(
            session_timeout = self.settings.session_timeout.minutes(),
            maintenance_mode = self.settings.maintenance_mode,
            "settings updated"
        );
        self.subscribers.notify(StoreChange::Settings);
        true
    }

    /// Restore [`Settings::default`]. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        let defaults = Settings::default();
        if self.settings == defaults {
            return false;
        }
        self.settings = defaults;
        info!("settings reset to defaults");
        self.subscribers.notify(StoreChange::Settings);
        true
    }
}
