//! Form controllers: transient per-dialog state staged against a draft.

mod settings_form;
mod user_dialog;

pub use self::settings_form::{
    SettingsChange, SettingsDraft, SettingsForm, SettingsFormError, SettingsFormView,
};
pub use self::user_dialog::{DialogMode, UserDialog, UserDialogView};
