//! State containers owned by the console.
//!
//! Each store is the single owner of one slice of state and the only place
//! it is mutated. Stores notify their listeners synchronously, and only when
//! the mutation actually changed something.

mod settings;
mod subscribers;
mod theme;
mod users;

pub use self::settings::SettingsStore;
pub use self::subscribers::SubscriptionId;
pub use self::theme::ThemeStore;
pub use self::users::{SortDirection, UserStore};
