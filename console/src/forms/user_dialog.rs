//! Add/edit dialog for a single user.
//!
//! A [`UserDialog`] exists only while the dialog is open; closing it drops
//! the draft. The store is read for uniqueness checks on every validation
//! and written once, on a successful [`UserDialog::submit`].

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{
    FieldErrors, FormMode, RuleContext, User, UserDraft, UserField, UserId, validate_field,
    validate_user,
};
use crate::store::UserStore;

/// Which record the dialog commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "user_id")]
pub enum DialogMode {
    /// Creates a new user on submit.
    Add,
    /// Overwrites the user with this id on submit.
    Edit(UserId),
}

impl DialogMode {
    /// Validation mode for this dialog.
    #[must_use]
    pub const fn form_mode(self) -> FormMode {
        match self {
            Self::Add => FormMode::Add,
            Self::Edit(_) => FormMode::Edit,
        }
    }

    /// Dialog heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Add => "Add New User",
            Self::Edit(_) => "Edit User",
        }
    }

    /// Label of the confirm button.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Add => "Add User",
            Self::Edit(_) => "Save Changes",
        }
    }
}

/// Read model for rendering the open dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDialogView {
    /// Add or edit, with the target id when editing.
    pub mode: DialogMode,
    /// Dialog heading.
    pub title: &'static str,
    /// Confirm button label.
    pub submit_label: &'static str,
    /// Current field values.
    pub draft: UserDraft,
    /// Messages for touched fields only.
    pub errors: FieldErrors,
}

/// Transient state of an open user dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDialog {
    mode: DialogMode,
    draft: UserDraft,
    touched: BTreeSet<UserField>,
    errors: FieldErrors,
}

impl UserDialog {
    /// Open in add mode with a blank draft (role `User`, status `Active`).
    #[must_use]
    pub fn open_add() -> Self {
        Self {
            mode: DialogMode::Add,
            draft: UserDraft::blank(),
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
        }
    }

    /// Open in edit mode with a copy of `user`'s current values.
    #[must_use]
    pub fn open_edit(user: &User) -> Self {
        Self {
            mode: DialogMode::Edit(user.id()),
            draft: UserDraft::from_user(user),
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
        }
    }

    /// Add or edit.
    #[must_use]
    pub const fn mode(&self) -> DialogMode {
        self.mode
    }

    /// Current field values.
    #[must_use]
    pub const fn draft(&self) -> &UserDraft {
        &self.draft
    }

    /// Whether `field` has been blurred or submitted.
    #[must_use]
    pub fn is_touched(&self, field: UserField) -> bool {
        self.touched.contains(&field)
    }

    /// Error shown for `field`, if it is touched and invalid.
    #[must_use]
    pub fn visible_error(&self, field: UserField) -> Option<&str> {
        self.errors
            .get(field)
            .filter(|_| self.is_touched(field))
    }

    /// Errors for every touched field.
    #[must_use]
    pub fn visible_errors(&self) -> FieldErrors {
        let mut visible = FieldErrors::new();
        for (field, message) in self.errors.iter() {
            if self.is_touched(field) {
                visible.insert(field, message);
            }
        }
        visible
    }

    /// Update one field of the draft. The store is not touched.
    ///
    /// A field that has already been touched is revalidated immediately.
    pub fn change(&mut self, field: UserField, value: impl Into<String>, store: &UserStore) {
        self.draft.set(field, value.into());
        debug!(field = %field, "user draft changed");
        if self.is_touched(field) {
            self.revalidate(field, store);
        }
    }

    /// Mark `field` touched and validate it.
    pub fn blur(&mut self, field: UserField, store: &UserStore) {
        self.touched.insert(field);
        self.revalidate(field, store);
    }

    fn context<'a>(&self, store: &'a UserStore) -> RuleContext<'a> {
        match self.mode {
            DialogMode::Add => RuleContext::adding(store.users()),
            DialogMode::Edit(id) => RuleContext::editing(store.users(), store.get(id)),
        }
    }

    fn revalidate(&mut self, field: UserField, store: &UserStore) {
        let ctx = self.context(store);
        match validate_field(field, self.draft.value(field), &ctx) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(field),
        }
    }

    /// Validate every field and commit the draft.
    ///
    /// On success the record is added or updated, touched and error state
    /// are cleared, and the committed id is returned; the caller then closes
    /// the dialog. On failure nothing is written, every field is marked
    /// touched, and all field errors are returned.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] with one message per invalid field.
    pub fn submit(&mut self, store: &mut UserStore) -> Result<UserId, FieldErrors> {
        let ctx = self.context(store);
        let record = match validate_user(&self.draft, &ctx) {
            Ok(record) => record,
            Err(errors) => {
                warn!(
                    mode = ?self.mode.form_mode(),
                    invalid_fields = errors.len(),
                    "user submit rejected"
                );
                self.touched.extend(UserField::ALL);
                self.errors = errors.clone();
                return Err(errors);
            }
        };

        let id = match self.mode {
            DialogMode::Add => store.add(record),
            DialogMode::Edit(id) => {
                store.update(id, record);
                id
            }
        };
        info!(user_id = %id, mode = ?self.mode.form_mode(), "user dialog committed");
        self.touched.clear();
        self.errors.clear();
        Ok(id)
    }

    /// Read model for rendering.
    #[must_use]
    pub fn view(&self) -> UserDialogView {
        UserDialogView {
            mode: self.mode,
            title: self.mode.title(),
            submit_label: self.mode.submit_label(),
            draft: self.draft.clone(),
            errors: self.visible_errors(),
        }
    }
}
