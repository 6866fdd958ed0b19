//! Directory member model.
//!
//! A [`User`] is only ever created by the user store, which assigns its
//! [`UserId`]. Callers hand the store a [`NewUser`] (every field except the
//! identifier); the user dialog stages raw form input in a [`UserDraft`] until
//! validation turns it into a [`NewUser`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseEnumError;
use super::validation::UserField;

/// Store-assigned user identifier.
///
/// Identifiers are issued in increasing order and never reissued, even after
/// the user that held one is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier issued after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Permission tier of a directory member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Regular member.
    #[default]
    User,
    /// Content moderation rights.
    Moderator,
}

impl Role {
    /// Every role, in the order the dialog offers them.
    pub const ALL: [Self; 3] = [Self::User, Self::Moderator, Self::Admin];

    /// Label used in forms and read models.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Moderator => "Moderator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("role", s))
    }
}

/// Whether a member account is currently enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// The account is enabled.
    #[default]
    Active,
    /// The account is disabled.
    Inactive,
}

impl Status {
    /// Every status, in the order the dialog offers them.
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    /// Label used in forms and read models.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("status", s))
    }
}

/// A user record without its identifier.
///
/// This is what callers hand to the store on add and update. The store does
/// not re-validate it; the dialog only produces one after the full rule table
/// has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Contact address; unique across the directory ignoring case.
    pub email: String,
    /// Permission tier.
    pub role: Role,
    /// Account state.
    pub status: Status,
}

/// Directory member owned by the user store.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - No two users in a store share an email once case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: Role,
    status: Status,
}

impl User {
    /// Attach an identifier to a record.
    #[must_use]
    pub fn new(id: UserId, record: NewUser) -> Self {
        let NewUser {
            name,
            email,
            role,
            status,
        } = record;
        Self {
            id,
            name,
            email,
            role,
            status,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact address.
    #[must_use]
    pub const fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Permission tier.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Account state.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }
}

/// Raw field values held by an open user dialog.
///
/// Values are kept exactly as typed or selected; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Name input.
    pub name: String,
    /// Email input.
    pub email: String,
    /// Selected role label.
    pub role: String,
    /// Selected status label.
    pub status: String,
}

impl UserDraft {
    /// Blank draft for a new user: empty text fields, default role and status.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::default().as_str().to_owned(),
            status: Status::default().as_str().to_owned(),
        }
    }

    /// Draft seeded from an existing user's current values.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            role: user.role().as_str().to_owned(),
            status: user.status().as_str().to_owned(),
        }
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Role => &self.role,
            UserField::Status => &self.status,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::Name => self.name = value,
            UserField::Email => self.email = value,
            UserField::Role => self.role = value,
            UserField::Status => self.status = value,
        }
    }
}

impl Default for UserDraft {
    fn default() -> Self {
        Self::blank()
    }
}
