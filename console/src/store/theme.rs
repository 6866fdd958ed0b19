//! Theme preference store.

use tracing::info;

use super::subscribers::{SubscriptionId, Subscribers};
use crate::domain::{StoreChange, StoreListener, ThemeMode, ThemePreference};

/// Owns the single live [`ThemePreference`].
#[derive(Debug, Default)]
pub struct ThemeStore {
    theme: ThemePreference,
    subscribers: Subscribers,
}

impl ThemeStore {
    /// A store holding the default palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for [`StoreChange::Theme`].
    pub fn subscribe(&mut self, listener: Box<dyn StoreListener>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// The live preference.
    #[must_use]
    pub const fn get(&self) -> &ThemePreference {
        &self.theme
    }

    /// Switch between light and dark.
    pub fn set_mode(&mut self, mode: ThemeMode) -> bool {
        self.replace(ThemePreference {
            mode,
            ..self.theme.clone()
        })
    }

    /// Set the primary colour string.
    pub fn set_primary_color(&mut self, color: impl Into<String>) -> bool {
        self.replace(ThemePreference {
            primary_color: color.into(),
            ..self.theme.clone()
        })
    }

    /// Set the secondary colour string.
    pub fn set_secondary_color(&mut self, color: impl Into<String>) -> bool {
        self.replace(ThemePreference {
            secondary_color: color.into(),
            ..self.theme.clone()
        })
    }

    /// Replace the whole preference. Returns whether anything changed.
    pub fn replace(&mut self, theme: ThemePreference) -> bool {
        if self.theme == theme {
            return false;
        }
        self.theme = theme;
        info!(mode = %self.theme.mode, "theme updated");
        self.subscribers.notify(StoreChange::Theme);
        true
    }

    /// Restore [`ThemePreference::default`].
    pub fn reset(&mut self) -> bool {
        self.replace(ThemePreference::default())
    }
}
