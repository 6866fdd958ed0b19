//! Presentation helpers for user rows: avatar initials and colours.
//!
//! Everything here is a pure function of its input so rows render the same
//! way on every refresh.

use super::user::{Role, Status};

const FALLBACK_NAME: &str = "Unknown";

/// Initials shown in a user's avatar.
///
/// Takes the first letter of the first two words. Blank names fall back to
/// `Unknown`, giving `U`.
///
/// # Examples
///
/// ```
/// use admin_console::domain::avatar::initials;
///
/// assert_eq!(initials("John Doe"), "JD");
/// assert_eq!(initials("John"), "J");
/// assert_eq!(initials("  "), "U");
/// ```
#[must_use]
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().unwrap_or(FALLBACK_NAME);
    let second = words.next();
    first
        .chars()
        .take(1)
        .chain(second.into_iter().flat_map(|word| word.chars().take(1)))
        .collect()
}

/// Deterministic `#rrggbb` colour derived from `value`.
///
/// Folds the UTF-16 code units of `value` with a 31-multiplier rolling hash
/// in wrapping 32-bit arithmetic, then renders the low three bytes,
/// least-significant first.
#[must_use]
pub fn string_to_color(value: &str) -> String {
    let hash = value.encode_utf16().fold(0_i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });

    let byte = |shift: u32| (hash >> shift) & 0xff;
    format!("#{:02x}{:02x}{:02x}", byte(0), byte(8), byte(16))
}

/// Badge colour for a role.
#[must_use]
pub const fn role_color(role: Role) -> &'static str {
    match role {
        Role::Admin => "#f44336",
        Role::Moderator => "#ff9800",
        Role::User => "#4caf50",
    }
}

/// Badge colour for an account status.
#[must_use]
pub const fn status_color(status: Status) -> &'static str {
    match status {
        Status::Active => "#4caf50",
        Status::Inactive => "#f44336",
    }
}
