//! Admin console core.
//!
//! State, validation, and form orchestration behind an administrative console
//! with three views: overview metrics, user directory management, and
//! application settings. Rendering is left to a collaborator that reports
//! [`Intent`]s and reads the view models [`Console`] exposes.
//!
//! ```
//! use admin_console::{Console, ConsoleSettings, Intent};
//! use admin_console::domain::UserField;
//!
//! let config = ConsoleSettings {
//!     seed_example_users: Some(false),
//!     json_logs: None,
//!     initial_sort: None,
//! };
//! let mut console = Console::from_config(&config).expect("config is valid");
//! console.dispatch(Intent::OpenAdd).expect("nothing is open");
//! console
//!     .dispatch(Intent::FieldChange { field: UserField::Name, value: "Al".into() })
//!     .expect("user dialog is open");
//! console
//!     .dispatch(Intent::FieldChange { field: UserField::Email, value: "al@ex.com".into() })
//!     .expect("user dialog is open");
//! console.dispatch(Intent::Submit).expect("draft is valid");
//! assert_eq!(console.users().len(), 1);
//! ```

pub mod config;
pub mod console;
pub mod domain;
pub mod forms;
pub mod seed;
pub mod store;

pub use config::{ConfigError, ConsoleSettings};
pub use console::{
    Console, ConsoleError, DialogKind, DialogView, Intent, Outcome, UserListView, UserRow,
};
