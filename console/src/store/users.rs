//! User directory store.
//!
//! Owns the canonical, insertion-ordered user collection. The store assigns
//! identifiers and trusts its callers to have validated records; the user
//! dialog is the only caller that builds new records.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::subscribers::{SubscriptionId, Subscribers};
use crate::domain::{NewUser, ParseEnumError, StoreChange, StoreListener, User, UserId};

/// Order of the display list by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// A to Z.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Z to A.
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Stable label, `asc` or `desc`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(ParseEnumError::new("sort direction", s)),
        }
    }
}

/// Compare names the way a reader expects: case-insensitively first, then
/// lowercase before uppercase.
fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

/// Canonical user collection.
///
/// ## Invariants
/// - Identifiers are unique and never reissued.
/// - Case-folded emails are unique, provided callers validate before adding
///   or updating.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
    last_issued: Option<UserId>,
    sort_direction: SortDirection,
    subscribers: Subscribers,
}

impl UserStore {
    /// An empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory preloaded with `users`, kept in the given order.
    ///
    /// The caller guarantees identifiers and case-folded emails are unique.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        let last_issued = users.iter().map(User::id).max();
        Self {
            users,
            last_issued,
            ..Self::default()
        }
    }

    /// Register a listener for [`StoreChange::Users`] and
    /// [`StoreChange::SortDirection`].
    pub fn subscribe(&mut self, listener: Box<dyn StoreListener>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn next_id(&self) -> UserId {
        let current_max = self.users.iter().map(User::id).max();
        current_max
            .max(self.last_issued)
            .map_or(UserId::new(1), UserId::next)
    }

    /// Append a user, assigning the next identifier.
    ///
    /// The new identifier is one greater than the highest identifier ever
    /// held by this store, or `1` for a fresh store.
    pub fn add(&mut self, record: NewUser) -> UserId {
        let id = self.next_id();
        self.users.push(User::new(id, record));
        self.last_issued = Some(id);
        info!(user_id = %id, "user added");
        self.subscribers.notify(StoreChange::Users);
        id
    }

    /// Replace every field but the identifier of the user with `id`.
    ///
    /// Returns `false`, and changes nothing, when no user has `id`. A
    /// record identical to the live one is accepted without notifying.
    pub fn update(&mut self, id: UserId, record: NewUser) -> bool {
        let Some(user) = self.users.iter_mut().find(|user| user.id() == id) else {
            return false;
        };
        let next = User::new(id, record);
        if *user == next {
            debug!(user_id = %id, "user update matched live record");
            return true;
        }
        *user = next;
        info!(user_id = %id, "user updated");
        self.subscribers.notify(StoreChange::Users);
        true
    }

    /// Remove the user with `id`.
    ///
    /// Returns `false`, and changes nothing, when no user has `id`.
    pub fn delete(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id() != id);
        if self.users.len() == before {
            return false;
        }
        info!(user_id = %id, "user deleted");
        self.subscribers.notify(StoreChange::Users);
        true
    }

    /// Set the direction used by [`UserStore::list`]. Storage order is
    /// untouched.
    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        if self.sort_direction == direction {
            return;
        }
        self.sort_direction = direction;
        debug!(direction = %direction, "sort direction changed");
        self.subscribers.notify(StoreChange::SortDirection);
    }

    /// Current display direction.
    #[must_use]
    pub const fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Users in insertion order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The user with `id`, if present.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Number of users.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users ordered by name in the current direction.
    #[must_use]
    pub fn list(&self) -> Vec<&User> {
        self.sorted(self.sort_direction)
    }

    /// Users ordered by name in `direction`.
    ///
    /// The sort is stable: users with equal names keep insertion order in
    /// both directions.
    #[must_use]
    pub fn sorted(&self, direction: SortDirection) -> Vec<&User> {
        let mut view: Vec<&User> = self.users.iter().collect();
        match direction {
            SortDirection::Ascending => view.sort_by(|a, b| collate(a.name(), b.name())),
            SortDirection::Descending => view.sort_by(|a, b| collate(b.name(), a.name())),
        }
        view
    }
}
