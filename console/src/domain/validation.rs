//! User form validation.
//!
//! Two standalone predicates ([`validate_email_format`] and
//! [`validate_email_uniqueness`]) plus a data-driven rule table,
//! [`USER_RULES`], that the user dialog evaluates per field on blur and across
//! every field on submit. All functions are pure.
//!
//! # Rule order
//!
//! Rules for a field are evaluated in table order and the first failure wins,
//! so "required" always reports before a format or length rule.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{FieldErrors, ParseEnumError};
use super::user::{NewUser, Role, Status, User, UserDraft};

/// Minimum name length in characters.
pub const NAME_MIN: usize = 2;
/// Maximum name length in characters.
pub const NAME_MAX: usize = 50;
/// Minimum email length in characters.
pub const EMAIL_MIN: usize = 5;
/// Maximum email length in characters.
pub const EMAIL_MAX: usize = 100;

const LOCAL_PART_MAX: usize = 64;
const DOMAIN_MAX: usize = 253;
const DOMAIN_LABEL_MAX: usize = 63;

/// Whether a dialog creates a user or overwrites an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    /// Creating a new user.
    Add,
    /// Editing an existing user.
    Edit,
}

/// Editable fields of the user dialog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    /// Display name.
    Name,
    /// Contact address.
    Email,
    /// Permission tier.
    Role,
    /// Account state.
    Status,
}

impl UserField {
    /// Every field in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Role, Self::Status];

    /// Stable field key used in error maps and intents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserField {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("field", s))
    }
}

/// What a rule may consult besides the value under test.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Every user currently in the directory.
    pub existing: &'a [User],
    /// Whether the form adds or edits.
    pub mode: FormMode,
    /// The user being edited, in edit mode.
    pub current: Option<&'a User>,
}

impl<'a> RuleContext<'a> {
    /// Context for a dialog creating a new user.
    #[must_use]
    pub const fn adding(existing: &'a [User]) -> Self {
        Self {
            existing,
            mode: FormMode::Add,
            current: None,
        }
    }

    /// Context for a dialog editing `current`.
    #[must_use]
    pub const fn editing(existing: &'a [User], current: Option<&'a User>) -> Self {
        Self {
            existing,
            mode: FormMode::Edit,
            current,
        }
    }
}

/// A named validation rule: a predicate over one field and the message shown
/// when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Field the rule applies to.
    pub field: UserField,
    /// Stable rule identifier.
    pub name: &'static str,
    /// Message surfaced when the predicate fails.
    pub message: &'static str,
    check: fn(&str, &RuleContext<'_>) -> bool,
}

impl Rule {
    /// Whether `value` satisfies this rule.
    #[must_use]
    pub fn passes(&self, value: &str, ctx: &RuleContext<'_>) -> bool {
        (self.check)(value, ctx)
    }
}

/// Every rule of the user schema, grouped by field in evaluation order.
pub const USER_RULES: &[Rule] = &[
    Rule {
        field: UserField::Name,
        name: "required",
        message: "Name is required",
        check: |value, _| is_present(value),
    },
    Rule {
        field: UserField::Name,
        name: "min_length",
        message: "Name must be at least 2 characters",
        check: |value, _| char_len(value.trim()) >= NAME_MIN,
    },
    Rule {
        field: UserField::Name,
        name: "max_length",
        message: "Name must be less than 50 characters",
        check: |value, _| char_len(value.trim()) <= NAME_MAX,
    },
    Rule {
        field: UserField::Name,
        name: "letters_and_spaces",
        message: "Name can only contain letters and spaces",
        check: |value, _| name_regex().is_match(value),
    },
    Rule {
        field: UserField::Email,
        name: "required",
        message: "Email is required",
        check: |value, _| is_present(value),
    },
    Rule {
        field: UserField::Email,
        name: "format",
        message: "Please enter a valid email address",
        check: |value, _| validate_email_format(value),
    },
    Rule {
        field: UserField::Email,
        name: "min_length",
        message: "Email must be at least 5 characters",
        check: |value, _| char_len(value) >= EMAIL_MIN,
    },
    Rule {
        field: UserField::Email,
        name: "max_length",
        message: "Email must be less than 100 characters",
        check: |value, _| char_len(value) <= EMAIL_MAX,
    },
    Rule {
        field: UserField::Email,
        name: "unique",
        message: "Email already exists",
        check: |value, ctx| {
            validate_email_uniqueness(value, ctx.existing, ctx.mode, ctx.current)
        },
    },
    Rule {
        field: UserField::Role,
        name: "one_of",
        message: "Invalid role",
        check: |value, _| value.parse::<Role>().is_ok(),
    },
    Rule {
        field: UserField::Status,
        name: "one_of",
        message: "Invalid status",
        check: |value, _| value.parse::<Status>().is_ok(),
    },
];

/// Rules that apply to `field`, in evaluation order.
pub fn rules_for(field: UserField) -> impl Iterator<Item = &'static Rule> {
    USER_RULES.iter().filter(move |rule| rule.field == field)
}

/// Validate one field, returning the first failing rule's message.
#[must_use]
pub fn validate_field(
    field: UserField,
    value: &str,
    ctx: &RuleContext<'_>,
) -> Option<&'static str> {
    rules_for(field)
        .find(|rule| !rule.passes(value, ctx))
        .map(|rule| rule.message)
}

/// Validate every field of `draft`.
///
/// On success returns the record to commit with name and email trimmed of
/// surrounding whitespace. On failure returns one message per invalid field.
///
/// # Errors
///
/// Returns [`FieldErrors`] holding a message for every field that failed.
pub fn validate_user(draft: &UserDraft, ctx: &RuleContext<'_>) -> Result<NewUser, FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in UserField::ALL {
        if let Some(message) = validate_field(field, draft.value(field), ctx) {
            errors.insert(field, message);
        }
    }

    match (draft.role.parse::<Role>(), draft.status.parse::<Status>()) {
        (Ok(role), Ok(status)) if errors.is_empty() => Ok(NewUser {
            name: draft.name.trim().to_owned(),
            email: draft.email.trim().to_owned(),
            role,
            status,
        }),
        _ => Err(errors),
    }
}

/// Whether `email` is a syntactically valid address.
///
/// Accepts `local@domain` where the local part is one or more dot-separated
/// atoms and the domain has at least two labels, each alphanumeric with
/// interior hyphens, ending in an alphabetic top-level label of two or more
/// characters. Surrounding whitespace, empty atoms (leading, trailing, or
/// doubled dots), and empty input are rejected.
///
/// # Examples
///
/// ```
/// use admin_console::domain::validate_email_format;
///
/// assert!(validate_email_format("test@example.com"));
/// assert!(!validate_email_format("invalid-email"));
/// assert!(!validate_email_format("a@b.c"));
/// assert!(!validate_email_format(""));
/// ```
#[must_use]
pub fn validate_email_format(email: &str) -> bool {
    if email.is_empty() || email.trim() != email {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > LOCAL_PART_MAX || domain.len() > DOMAIN_MAX {
        return false;
    }
    if !local.split('.').all(|atom| local_atom_regex().is_match(atom)) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, _)) = labels.split_last() else {
        return false;
    };
    labels.len() >= 2
        && labels
            .iter()
            .all(|label| label.len() <= DOMAIN_LABEL_MAX && domain_label_regex().is_match(label))
        && tld_regex().is_match(tld)
}

/// Whether `email` is free to use, ignoring case.
///
/// In [`FormMode::Add`] no existing user may hold the address. In
/// [`FormMode::Edit`] with a `current` user, only *other* users count, so a
/// user keeping their own address passes.
///
/// # Examples
///
/// ```
/// use admin_console::domain::{FormMode, validate_email_uniqueness};
///
/// assert!(validate_email_uniqueness("new@example.com", &[], FormMode::Add, None));
/// ```
#[must_use]
pub fn validate_email_uniqueness(
    email: &str,
    existing: &[User],
    mode: FormMode,
    current: Option<&User>,
) -> bool {
    let folded = email.to_lowercase();
    let excluded = match mode {
        FormMode::Edit => current.map(User::id),
        FormMode::Add => None,
    };
    !existing
        .iter()
        .filter(|user| Some(user.id()) != excluded)
        .any(|user| user.email().to_lowercase() == folded)
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static LOCAL_ATOM_RE: OnceLock<Regex> = OnceLock::new();
static DOMAIN_LABEL_RE: OnceLock<Regex> = OnceLock::new();
static TLD_RE: OnceLock<Regex> = OnceLock::new();

fn compile(slot: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    slot.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("validation regex {pattern} failed to compile: {error}"))
    })
}

fn name_regex() -> &'static Regex {
    compile(&NAME_RE, r"^[A-Za-z\s]+$")
}

fn local_atom_regex() -> &'static Regex {
    compile(&LOCAL_ATOM_RE, r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+$")
}

fn domain_label_regex() -> &'static Regex {
    compile(&DOMAIN_LABEL_RE, r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$")
}

fn tld_regex() -> &'static Regex {
    // Length is enforced by the pattern; punycode labels are allowed.
    compile(&TLD_RE, r"^(?:[A-Za-z]{2,}|xn--[A-Za-z0-9-]{2,})$")
}

#[cfg(test)]
mod tests;
