//! Overview page metrics derived from live state.

use serde::Serialize;

use super::settings::Settings;
use super::theme::ThemePreference;
use super::user::{Role, Status, User};

/// Headline figures for the overview page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewMetrics {
    /// Users in the directory.
    pub total_users: usize,
    /// Users with [`Status::Active`].
    pub active_users: usize,
    /// Users with [`Status::Inactive`].
    pub inactive_users: usize,
    /// Users with [`Role::Admin`].
    pub admins: usize,
    /// Users with [`Role::Moderator`].
    pub moderators: usize,
    /// Users with [`Role::User`].
    pub members: usize,
    /// Whether maintenance mode is on.
    pub maintenance_mode: bool,
    /// Settings and theme fields that differ from their defaults.
    pub customised_settings: usize,
}

impl OverviewMetrics {
    /// Tally metrics from the current stores.
    #[must_use]
    pub fn collect(users: &[User], settings: &Settings, theme: &ThemePreference) -> Self {
        let mut metrics = users.iter().fold(Self::default(), |mut acc, user| {
            acc.total_users += 1;
            match user.status() {
                Status::Active => acc.active_users += 1,
                Status::Inactive => acc.inactive_users += 1,
            }
            match user.role() {
                Role::Admin => acc.admins += 1,
                Role::Moderator => acc.moderators += 1,
                Role::User => acc.members += 1,
            }
            acc
        });
        metrics.maintenance_mode = settings.maintenance_mode;
        metrics.customised_settings = settings.customised_fields() + theme.customised_fields();
        metrics
    }
}
