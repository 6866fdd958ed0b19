//! Root composition point.
//!
//! [`Console`] owns the three stores, at most one open dialog, and the
//! notifier. The rendering layer reports [`Intent`]s and reads back the view
//! models; nothing else holds a mutable path into the stores.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, ConsoleSettings};
use crate::domain::avatar::{initials, role_color, status_color, string_to_color};
use crate::domain::{
    FieldErrors, NoticeQueue, Notifier, OverviewMetrics, Role, Status, StoreListener, User,
    UserField, UserId,
};
use crate::forms::{
    SettingsChange, SettingsForm, SettingsFormError, SettingsFormView, UserDialog,
    UserDialogView,
};
use crate::seed::example_users;
use crate::store::{SettingsStore, SortDirection, SubscriptionId, ThemeStore, UserStore};

/// Kind of dialog the console can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
    /// Add/edit user dialog.
    User,
    /// Settings page.
    Settings,
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Settings => "settings",
        })
    }
}

/// Discrete interaction reported by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "intent", content = "args", rename_all = "snake_case")]
pub enum Intent {
    /// Flip the user list direction.
    Sort,
    /// Open the user dialog in add mode.
    OpenAdd,
    /// Open the user dialog on an existing user.
    Edit(UserId),
    /// Remove a user from the directory.
    Delete(UserId),
    /// Edit one user dialog field.
    FieldChange {
        /// Field being edited.
        field: UserField,
        /// New raw value.
        value: String,
    },
    /// Leave a user dialog field.
    Blur(UserField),
    /// Confirm the user dialog.
    Submit,
    /// Mount the settings page.
    OpenSettings,
    /// Stage one settings edit.
    SettingsChange(SettingsChange),
    /// Commit staged settings.
    Save,
    /// Restore default settings and theme.
    Reset,
    /// Drop staged settings.
    Discard,
    /// Close whichever dialog is open without committing.
    Close,
}

/// What a successfully dispatched intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed or was left as is; nothing else to report.
    Applied,
    /// The user dialog committed this user and closed.
    Committed(UserId),
    /// A delete ran; `removed` is `false` when no user had the id.
    Deleted {
        /// Target of the delete.
        id: UserId,
        /// Whether a record matched.
        removed: bool,
    },
}

/// Intent rejected by the console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// Another dialog is already open.
    #[error("the {open} dialog is already open")]
    DialogOpen {
        /// Dialog currently shown.
        open: DialogKind,
    },
    /// The intent needs an open dialog.
    #[error("no dialog is open")]
    NoDialogOpen,
    /// The intent targets a dialog other than the open one.
    #[error("expected the {expected} dialog but the {open} dialog is open")]
    WrongDialog {
        /// Dialog the intent needs.
        expected: DialogKind,
        /// Dialog currently shown.
        open: DialogKind,
    },
    /// Edit was requested for an id the directory does not hold.
    #[error("user {id} not found")]
    UserNotFound {
        /// Requested id.
        id: UserId,
    },
    /// The user dialog failed validation and stays open.
    #[error("user form is invalid: {0}")]
    Validation(#[from] FieldErrors),
    /// The settings page rejected the intent.
    #[error(transparent)]
    Settings(#[from] SettingsFormError),
}

/// One row of the user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    /// Identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Permission tier.
    pub role: Role,
    /// Account state.
    pub status: Status,
    /// Avatar letters.
    pub initials: String,
    /// Avatar background derived from the name.
    pub avatar_color: String,
    /// Role badge colour.
    pub role_color: &'static str,
    /// Status badge colour.
    pub status_color: &'static str,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            role: user.role(),
            status: user.status(),
            initials: initials(user.name()),
            avatar_color: string_to_color(user.name()),
            role_color: role_color(user.role()),
            status_color: status_color(user.status()),
        }
    }
}

/// Read model for the user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListView {
    /// Current sort indicator.
    pub sort_direction: SortDirection,
    /// Rows in display order.
    pub rows: Vec<UserRow>,
}

/// Read model for whichever dialog is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "dialog", rename_all = "snake_case")]
pub enum DialogView {
    /// The user dialog.
    User(UserDialogView),
    /// The settings page.
    Settings(SettingsFormView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ActiveDialog {
    User(UserDialog),
    Settings(SettingsForm),
}

impl ActiveDialog {
    const fn kind(&self) -> DialogKind {
        match self {
            Self::User(_) => DialogKind::User,
            Self::Settings(_) => DialogKind::Settings,
        }
    }
}

fn rejected(err: ConsoleError) -> ConsoleError {
    warn!(error = %err, "console intent rejected");
    err
}

fn ensure_closed(dialog: Option<&ActiveDialog>) -> Result<(), ConsoleError> {
    dialog.map_or(Ok(()), |open| {
        Err(rejected(ConsoleError::DialogOpen { open: open.kind() }))
    })
}

fn user_dialog(dialog: &mut Option<ActiveDialog>) -> Result<&mut UserDialog, ConsoleError> {
    match dialog {
        Some(ActiveDialog::User(form)) => Ok(form),
        Some(other) => Err(rejected(ConsoleError::WrongDialog {
            expected: DialogKind::User,
            open: other.kind(),
        })),
        None => Err(rejected(ConsoleError::NoDialogOpen)),
    }
}

fn settings_form(dialog: &mut Option<ActiveDialog>) -> Result<&mut SettingsForm, ConsoleError> {
    match dialog {
        Some(ActiveDialog::Settings(form)) => Ok(form),
        Some(other) => Err(rejected(ConsoleError::WrongDialog {
            expected: DialogKind::Settings,
            open: other.kind(),
        })),
        None => Err(rejected(ConsoleError::NoDialogOpen)),
    }
}

/// The console core.
///
/// ## Invariants
/// - At most one dialog is open.
/// - Stores change only through the methods below.
#[derive(Debug)]
pub struct Console<N: Notifier = NoticeQueue> {
    users: UserStore,
    settings: SettingsStore,
    theme: ThemeStore,
    dialog: Option<ActiveDialog>,
    notifier: N,
}

impl Console<NoticeQueue> {
    /// Compose a console from process configuration, collecting notices in
    /// a [`NoticeQueue`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `initial_sort` is not `asc` or `desc`.
    pub fn from_config(config: &ConsoleSettings) -> Result<Self, ConfigError> {
        let mut users = if config.seed_example_users() {
            UserStore::with_users(example_users())
        } else {
            UserStore::new()
        };
        users.set_sort_direction(config.initial_sort()?);
        info!(
            users = users.len(),
            sort = %users.sort_direction(),
            "console composed"
        );
        Ok(Self::new(users, NoticeQueue::default()))
    }
}

impl<N: Notifier> Console<N> {
    /// Compose a console over `users` with default settings and theme.
    #[must_use]
    pub fn new(users: UserStore, notifier: N) -> Self {
        Self {
            users,
            settings: SettingsStore::new(),
            theme: ThemeStore::new(),
            dialog: None,
            notifier,
        }
    }

    /// The user directory.
    #[must_use]
    pub const fn users(&self) -> &UserStore {
        &self.users
    }

    /// The settings store.
    #[must_use]
    pub const fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// The theme store.
    #[must_use]
    pub const fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    /// The notifier receiving save and reset notices.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable access to the notifier, for draining queued notices.
    pub const fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Listen for user list changes.
    pub fn subscribe_users(&mut self, listener: Box<dyn StoreListener>) -> SubscriptionId {
        self.users.subscribe(listener)
    }

    /// Listen for settings changes.
    pub fn subscribe_settings(&mut self, listener: Box<dyn StoreListener>) -> SubscriptionId {
        self.settings.subscribe(listener)
    }

    /// Listen for theme changes.
    pub fn subscribe_theme(&mut self, listener: Box<dyn StoreListener>) -> SubscriptionId {
        self.theme.subscribe(listener)
    }

    /// Stop a listener registered through any `subscribe_*` method.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.users.unsubscribe(id) || self.settings.unsubscribe(id) || self.theme.unsubscribe(id)
    }

    /// Which dialog is open, if any.
    #[must_use]
    pub fn active_dialog(&self) -> Option<DialogKind> {
        self.dialog.as_ref().map(ActiveDialog::kind)
    }

    /// Apply one intent.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] when the intent's precondition does not hold
    /// or a form rejects it; state is unchanged apart from the user dialog's
    /// error display.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Outcome, ConsoleError> {
        debug!(intent = ?intent, "dispatching intent");
        match intent {
            Intent::Sort => self.toggle_sort(),
            Intent::OpenAdd => self.open_add()?,
            Intent::Edit(id) => self.open_edit(id)?,
            Intent::Delete(id) => {
                let removed = self.delete(id)?;
                return Ok(Outcome::Deleted { id, removed });
            }
            Intent::FieldChange { field, value } => self.change_field(field, value)?,
            Intent::Blur(field) => self.blur(field)?,
            Intent::Submit => return self.submit().map(Outcome::Committed),
            Intent::OpenSettings => self.open_settings()?,
            Intent::SettingsChange(change) => self.change_setting(change)?,
            Intent::Save => self.save()?,
            Intent::Reset => self.reset()?,
            Intent::Discard => self.discard()?,
            Intent::Close => self.close()?,
        }
        Ok(Outcome::Applied)
    }

    /// Flip the user list between ascending and descending.
    pub fn toggle_sort(&mut self) {
        let next = self.users.sort_direction().toggled();
        self.users.set_sort_direction(next);
    }

    /// Open the user dialog in add mode.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::DialogOpen`] when a dialog is already open.
    pub fn open_add(&mut self) -> Result<(), ConsoleError> {
        ensure_closed(self.dialog.as_ref())?;
        self.dialog = Some(ActiveDialog::User(UserDialog::open_add()));
        debug!("user dialog opened for add");
        Ok(())
    }

    /// Open the user dialog on user `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::DialogOpen`] when a dialog is already open and
    /// [`ConsoleError::UserNotFound`] when `id` is unknown.
    pub fn open_edit(&mut self, id: UserId) -> Result<(), ConsoleError> {
        ensure_closed(self.dialog.as_ref())?;
        let user = self
            .users
            .get(id)
            .ok_or_else(|| rejected(ConsoleError::UserNotFound { id }))?;
        self.dialog = Some(ActiveDialog::User(UserDialog::open_edit(user)));
        debug!(user_id = %id, "user dialog opened for edit");
        Ok(())
    }

    /// Delete user `id`. Returns whether a record matched; an unknown id is
    /// a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::DialogOpen`] while any dialog is open.
    pub fn delete(&mut self, id: UserId) -> Result<bool, ConsoleError> {
        ensure_closed(self.dialog.as_ref())?;
        Ok(self.users.delete(id))
    }

    /// Edit one field of the open user dialog.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NoDialogOpen`] or
    /// [`ConsoleError::WrongDialog`] when the user dialog is not open.
    pub fn change_field(&mut self, field: UserField, value: String) -> Result<(), ConsoleError> {
        user_dialog(&mut self.dialog)?.change(field, value, &self.users);
        Ok(())
    }

    /// Leave one field of the open user dialog.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NoDialogOpen`] or
    /// [`ConsoleError::WrongDialog`] when the user dialog is not open.
    pub fn blur(&mut self, field: UserField) -> Result<(), ConsoleError> {
        user_dialog(&mut self.dialog)?.blur(field, &self.users);
        Ok(())
    }

    /// Submit the user dialog, closing it on success.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] with every field error when the
    /// draft is invalid; the dialog stays open. Returns
    /// [`ConsoleError::NoDialogOpen`] or [`ConsoleError::WrongDialog`] when
    /// the user dialog is not open.
    pub fn submit(&mut self) -> Result<UserId, ConsoleError> {
        let id = user_dialog(&mut self.dialog)?.submit(&mut self.users)?;
        self.dialog = None;
        Ok(id)
    }

    /// Mount the settings page with a draft of the live settings and theme.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::DialogOpen`] when a dialog is already open.
    pub fn open_settings(&mut self) -> Result<(), ConsoleError> {
        ensure_closed(self.dialog.as_ref())?;
        self.dialog = Some(ActiveDialog::Settings(SettingsForm::mount(
            &self.settings,
            &self.theme,
        )));
        debug!("settings page mounted");
        Ok(())
    }

    /// Stage one settings edit.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Settings`] for an invalid session timeout, or
    /// a dialog precondition error when the settings page is not open.
    pub fn change_setting(&mut self, change: SettingsChange) -> Result<(), ConsoleError> {
        settings_form(&mut self.dialog)?.apply(change)?;
        Ok(())
    }

    /// Commit staged settings and theme.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Settings`] when nothing is staged, or a dialog
    /// precondition error when the settings page is not open.
    pub fn save(&mut self) -> Result<(), ConsoleError> {
        settings_form(&mut self.dialog)?.save(
            &mut self.settings,
            &mut self.theme,
            &mut self.notifier,
        )?;
        Ok(())
    }

    /// Restore default settings and theme, then resync the draft.
    ///
    /// # Errors
    ///
    /// Returns a dialog precondition error when the settings page is not
    /// open.
    pub fn reset(&mut self) -> Result<(), ConsoleError> {
        settings_form(&mut self.dialog)?.reset(
            &mut self.settings,
            &mut self.theme,
            &mut self.notifier,
        );
        Ok(())
    }

    /// Drop staged settings edits.
    ///
    /// # Errors
    ///
    /// Returns a dialog precondition error when the settings page is not
    /// open.
    pub fn discard(&mut self) -> Result<(), ConsoleError> {
        settings_form(&mut self.dialog)?.discard(&self.settings, &self.theme);
        Ok(())
    }

    /// Close the open dialog, dropping its draft.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NoDialogOpen`] when nothing is open.
    pub fn close(&mut self) -> Result<(), ConsoleError> {
        let closed = self
            .dialog
            .take()
            .ok_or_else(|| rejected(ConsoleError::NoDialogOpen))?;
        debug!(dialog = %closed.kind(), "dialog closed");
        Ok(())
    }

    /// Rows of the user table in the current sort direction.
    #[must_use]
    pub fn user_list(&self) -> UserListView {
        UserListView {
            sort_direction: self.users.sort_direction(),
            rows: self.users.list().into_iter().map(UserRow::from).collect(),
        }
    }

    /// Read model of the open dialog.
    #[must_use]
    pub fn dialog_view(&self) -> Option<DialogView> {
        self.dialog.as_ref().map(|dialog| match dialog {
            ActiveDialog::User(form) => DialogView::User(form.view()),
            ActiveDialog::Settings(form) => {
                DialogView::Settings(form.view(&self.settings, &self.theme))
            }
        })
    }

    /// Dashboard metrics over the live stores.
    #[must_use]
    pub fn overview(&self) -> OverviewMetrics {
        OverviewMetrics::collect(self.users.users(), self.settings.get(), self.theme.get())
    }
}
