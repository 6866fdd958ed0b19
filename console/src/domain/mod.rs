//! Domain primitives, validation, and ports.
//!
//! Purpose: define the strongly typed records the stores own (users,
//! settings, theme), the pure validation rules applied to user drafts, and
//! the ports through which the core talks to rendering and notification
//! collaborators. Nothing here mutates shared state.
//!
//! Public surface:
//! - Directory members: `User`, `NewUser`, `UserDraft`, `UserId`, `Role`,
//!   `Status`.
//! - Application settings: `Settings`, `SettingsPatch`, `SessionTimeout`.
//! - Palette selection: `ThemePreference`, `ThemeMode`.
//! - User form validation: `validate_email_format`,
//!   `validate_email_uniqueness`, `USER_RULES`.
//! - Outbound ports: `StoreListener`, `Notifier`.

pub mod avatar;
pub mod error;
pub mod notification;
pub mod overview;
pub mod ports;
pub mod settings;
pub mod theme;
pub mod user;
pub mod validation;

pub use self::error::{FieldErrors, ParseEnumError};
pub use self::notification::{Notice, Severity};
pub use self::overview::OverviewMetrics;
pub use self::ports::{NoticeQueue, Notifier, StoreChange, StoreListener};
pub use self::settings::{SessionTimeout, Settings, SettingsPatch, SettingsValidationError};
pub use self::theme::{ThemeMode, ThemePreference};
pub use self::user::{NewUser, Role, Status, User, UserDraft, UserId};
pub use self::validation::{
    FormMode, Rule, RuleContext, USER_RULES, UserField, validate_email_format,
    validate_email_uniqueness, validate_field, validate_user,
};
