//! Behaviour tests for the user add/edit dialog.
//!
//! Scenarios drive the console through intents the way the rendering layer
//! would and check the directory and dialog read models afterwards.
#![expect(clippy::expect_used, reason = "behaviour tests fail fast on broken setup")]

use std::cell::RefCell;

use admin_console::domain::{NoticeQueue, Role, Status, UserField, UserId};
use admin_console::seed::example_users;
use admin_console::store::UserStore;
use admin_console::{Console, ConsoleError, DialogKind, DialogView, Intent};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

struct DialogWorld {
    console: RefCell<Console>,
    last_error: RefCell<Option<ConsoleError>>,
}

impl DialogWorld {
    fn new() -> Self {
        Self {
            console: RefCell::new(Console::new(UserStore::new(), NoticeQueue::default())),
            last_error: RefCell::new(None),
        }
    }

    fn replace_directory(&self, users: UserStore) {
        *self.console.borrow_mut() = Console::new(users, NoticeQueue::default());
    }

    fn dispatch(&self, intent: Intent) {
        let result = self.console.borrow_mut().dispatch(intent);
        *self.last_error.borrow_mut() = result.err();
    }

    fn field_error(&self, field: UserField) -> Option<String> {
        match self.console.borrow().dialog_view() {
            Some(DialogView::User(view)) => view.errors.get(field).map(str::to_owned),
            _ => None,
        }
    }
}

#[fixture]
fn world() -> DialogWorld {
    DialogWorld::new()
}

#[given("an empty user directory")]
fn an_empty_user_directory(world: &DialogWorld) {
    world.replace_directory(UserStore::new());
}

#[given("the example user directory")]
fn the_example_user_directory(world: &DialogWorld) {
    world.replace_directory(UserStore::with_users(example_users()));
}

#[when("the add user dialog is opened")]
fn the_add_user_dialog_is_opened(world: &DialogWorld) {
    world.dispatch(Intent::OpenAdd);
    assert!(world.last_error.borrow().is_none());
}

#[when("the edit dialog is opened for user {id}")]
fn the_edit_dialog_is_opened(world: &DialogWorld, id: u64) {
    world.dispatch(Intent::Edit(UserId::new(id)));
    assert!(world.last_error.borrow().is_none());
}

#[when("the {field} field is set to \"{value}\"")]
fn the_field_is_set(world: &DialogWorld, field: UserField, value: String) {
    world.dispatch(Intent::FieldChange { field, value });
}

#[when("the {field} field is blurred")]
fn the_field_is_blurred(world: &DialogWorld, field: UserField) {
    world.dispatch(Intent::Blur(field));
}

#[when("the dialog is submitted")]
fn the_dialog_is_submitted(world: &DialogWorld) {
    world.dispatch(Intent::Submit);
}

#[when("the dialog is closed")]
fn the_dialog_is_closed(world: &DialogWorld) {
    world.dispatch(Intent::Close);
}

#[then("the directory holds {count} users")]
fn the_directory_holds(world: &DialogWorld, count: usize) {
    assert_eq!(world.console.borrow().users().len(), count);
}

#[then("user {id} is named \"{name}\" with email \"{email}\"")]
fn user_is_named(world: &DialogWorld, id: u64, name: String, email: String) {
    let console = world.console.borrow();
    let user = console
        .users()
        .get(UserId::new(id))
        .expect("user should exist");
    assert_eq!(user.name(), name);
    assert_eq!(user.email(), email);
}

#[then("user {id} has role \"{role}\" and status \"{status}\"")]
fn user_has_role_and_status(world: &DialogWorld, id: u64, role: Role, status: Status) {
    let console = world.console.borrow();
    let user = console
        .users()
        .get(UserId::new(id))
        .expect("user should exist");
    assert_eq!(user.role(), role);
    assert_eq!(user.status(), status);
}

#[then("no dialog is open")]
fn no_dialog_is_open(world: &DialogWorld) {
    assert!(world.console.borrow().active_dialog().is_none());
}

#[then("the user dialog is still open")]
fn the_user_dialog_is_still_open(world: &DialogWorld) {
    assert_eq!(
        world.console.borrow().active_dialog(),
        Some(DialogKind::User)
    );
}

#[then("the submit is rejected")]
fn the_submit_is_rejected(world: &DialogWorld) {
    assert!(matches!(
        *world.last_error.borrow(),
        Some(ConsoleError::Validation(_))
    ));
}

#[then("the {field} error reads \"{message}\"")]
fn the_field_error_reads(world: &DialogWorld, field: UserField, message: String) {
    assert_eq!(world.field_error(field), Some(message));
}

#[then("the {field} field shows no error")]
fn the_field_shows_no_error(world: &DialogWorld, field: UserField) {
    assert_eq!(world.field_error(field), None);
}

#[scenario(
    path = "tests/features/user_dialog.feature",
    name = "Adding a user assigns the next sequential id"
)]
fn adding_a_user_assigns_the_next_sequential_id(world: DialogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/user_dialog.feature",
    name = "A failed submit shows every field error"
)]
fn a_failed_submit_shows_every_field_error(world: DialogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/user_dialog.feature",
    name = "Blurring a touched field surfaces its error"
)]
fn blurring_a_touched_field_surfaces_its_error(world: DialogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/user_dialog.feature",
    name = "Editing keeps the user's own email"
)]
fn editing_keeps_the_users_own_email(world: DialogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/user_dialog.feature",
    name = "Closing the dialog discards the draft"
)]
fn closing_the_dialog_discards_the_draft(world: DialogWorld) {
    drop(world);
}
