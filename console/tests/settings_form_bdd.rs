//! Behaviour tests for the settings page.
//!
//! These scenarios cover staging, saving, resetting, and discarding edits to
//! the settings record and theme preference, including the notices emitted.

use std::cell::RefCell;

use admin_console::domain::{NoticeQueue, Settings, Severity, ThemeMode};
use admin_console::forms::{SettingsChange, SettingsFormError};
use admin_console::store::UserStore;
use admin_console::{Console, ConsoleError, DialogView, Intent};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

struct SettingsWorld {
    console: RefCell<Console>,
    last_error: RefCell<Option<ConsoleError>>,
}

impl SettingsWorld {
    fn new() -> Self {
        Self {
            console: RefCell::new(Console::new(UserStore::new(), NoticeQueue::default())),
            last_error: RefCell::new(None),
        }
    }

    fn dispatch(&self, intent: Intent) {
        let result = self.console.borrow_mut().dispatch(intent);
        *self.last_error.borrow_mut() = result.err();
    }

    fn is_dirty(&self) -> bool {
        match self.console.borrow().dialog_view() {
            Some(DialogView::Settings(view)) => view.dirty,
            other => panic!("settings page should be open, found {other:?}"),
        }
    }

    fn has_notice(&self, severity: Severity, message: &str) -> bool {
        self.console
            .borrow()
            .notifier()
            .pending()
            .iter()
            .any(|notice| notice.severity == severity && notice.message == message)
    }
}

#[fixture]
fn world() -> SettingsWorld {
    SettingsWorld::new()
}

#[given("the settings page is open")]
fn the_settings_page_is_open(world: &SettingsWorld) {
    world.dispatch(Intent::OpenSettings);
    assert!(world.last_error.borrow().is_none());
}

#[when("the session timeout is changed to {minutes} minutes")]
fn the_session_timeout_is_changed(world: &SettingsWorld, minutes: u32) {
    world.dispatch(Intent::SettingsChange(SettingsChange::SessionTimeout(
        minutes,
    )));
}

#[when("the theme is switched to {mode}")]
fn the_theme_is_switched(world: &SettingsWorld, mode: ThemeMode) {
    world.dispatch(Intent::SettingsChange(SettingsChange::ThemeMode(mode)));
}

#[when("the application name is changed to \"{name}\"")]
fn the_application_name_is_changed(world: &SettingsWorld, name: String) {
    world.dispatch(Intent::SettingsChange(SettingsChange::AppName(name)));
}

#[when("the settings are saved")]
fn the_settings_are_saved(world: &SettingsWorld) {
    world.dispatch(Intent::Save);
}

#[when("the settings are reset")]
fn the_settings_are_reset(world: &SettingsWorld) {
    world.dispatch(Intent::Reset);
}

#[when("the staged edits are discarded")]
fn the_staged_edits_are_discarded(world: &SettingsWorld) {
    world.dispatch(Intent::Discard);
}

#[then("the settings page is dirty")]
fn the_settings_page_is_dirty(world: &SettingsWorld) {
    assert!(world.is_dirty());
}

#[then("the settings page is clean")]
fn the_settings_page_is_clean(world: &SettingsWorld) {
    assert!(!world.is_dirty());
}

#[then("the live session timeout is {minutes} minutes")]
fn the_live_session_timeout_is(world: &SettingsWorld, minutes: u32) {
    assert_eq!(
        world.console.borrow().settings().get().session_timeout.minutes(),
        minutes
    );
}

#[then("the staged session timeout is {minutes} minutes")]
fn the_staged_session_timeout_is(world: &SettingsWorld, minutes: u32) {
    let Some(DialogView::Settings(view)) = world.console.borrow().dialog_view() else {
        panic!("settings page should be open");
    };
    assert_eq!(view.draft.settings.session_timeout.minutes(), minutes);
}

#[then("the live theme mode is \"{mode}\"")]
fn the_live_theme_mode_is(world: &SettingsWorld, mode: ThemeMode) {
    assert_eq!(world.console.borrow().theme().get().mode, mode);
}

#[then("the live settings equal the defaults")]
fn the_live_settings_equal_the_defaults(world: &SettingsWorld) {
    assert_eq!(world.console.borrow().settings().get(), &Settings::default());
}

#[then("a success notice reads \"{message}\"")]
fn a_success_notice_reads(world: &SettingsWorld, message: String) {
    assert!(world.has_notice(Severity::Success, &message));
}

#[then("an info notice reads \"{message}\"")]
fn an_info_notice_reads(world: &SettingsWorld, message: String) {
    assert!(world.has_notice(Severity::Info, &message));
}

#[then("no notice is emitted")]
fn no_notice_is_emitted(world: &SettingsWorld) {
    assert!(world.console.borrow().notifier().pending().is_empty());
}

#[then("the save is rejected as having nothing to save")]
fn the_save_is_rejected(world: &SettingsWorld) {
    assert_eq!(
        *world.last_error.borrow(),
        Some(ConsoleError::Settings(SettingsFormError::NothingToSave))
    );
}

#[then("the change is rejected")]
fn the_change_is_rejected(world: &SettingsWorld) {
    let error = world.last_error.borrow();
    assert!(
        matches!(
            *error,
            Some(ConsoleError::Settings(SettingsFormError::Invalid(_)))
        ),
        "unexpected outcome: {error:?}"
    );
}

#[scenario(
    path = "tests/features/settings_form.feature",
    name = "Saving staged settings commits and notifies"
)]
fn saving_staged_settings_commits_and_notifies(world: SettingsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/settings_form.feature",
    name = "Saving without changes is rejected"
)]
fn saving_without_changes_is_rejected(world: SettingsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/settings_form.feature",
    name = "Out of range timeouts are refused"
)]
fn out_of_range_timeouts_are_refused(world: SettingsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/settings_form.feature",
    name = "Reset restores defaults after an update"
)]
fn reset_restores_defaults_after_an_update(world: SettingsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/settings_form.feature",
    name = "Discard drops staged edits"
)]
fn discard_drops_staged_edits(world: SettingsWorld) {
    drop(world);
}
