//! Domain-level error types.
//!
//! Field errors are recoverable and local: they describe what is wrong with a
//! draft and never abort anything but the submit that produced them.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::validation::UserField;

/// Returned when a label does not name a known enum value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {input}")]
pub struct ParseEnumError {
    /// What was being parsed, e.g. `role`.
    pub kind: &'static str,
    /// The rejected input.
    pub input: String,
}

impl ParseEnumError {
    /// Build an error for `kind` rejecting `input`.
    #[must_use]
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

/// Field-level validation messages keyed by field.
///
/// Holds at most one message per field. Iteration follows form order
/// (name, email, role, status).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<UserField, String>);

impl FieldErrors {
    /// An empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record `message` for `field`, replacing any previous message.
    pub fn insert(&mut self, field: UserField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clear the message for `field`.
    pub fn remove(&mut self, field: UserField) {
        self.0.remove(&field);
    }

    /// Message recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: UserField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether `field` currently has a message.
    #[must_use]
    pub fn contains(&self, field: UserField) -> bool {
        self.0.contains_key(&field)
    }

    /// Number of fields with a message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field has a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop every message.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterate `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (UserField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
