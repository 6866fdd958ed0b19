//! Example directory loaded at startup when seeding is enabled.

use crate::domain::{NewUser, Role, Status, User, UserId};

const EXAMPLE_USERS: [(&str, &str, Role, Status); 10] = [
    ("John Doe", "john.doe@example.com", Role::Admin, Status::Active),
    ("Jane Smith", "jane.smith@example.com", Role::User, Status::Active),
    ("Bob Johnson", "bob.johnson@example.com", Role::User, Status::Inactive),
    ("Alice Brown", "alice.brown@example.com", Role::Moderator, Status::Active),
    ("Charlie Wilson", "charlie.wilson@example.com", Role::User, Status::Active),
    ("Diana Davis", "diana.davis@example.com", Role::Admin, Status::Active),
    ("Edward Miller", "edward.miller@example.com", Role::User, Status::Inactive),
    ("Fiona Garcia", "fiona.garcia@example.com", Role::Moderator, Status::Active),
    ("George Taylor", "george.taylor@example.com", Role::User, Status::Active),
    ("Helen Anderson", "helen.anderson@example.com", Role::User, Status::Active),
];

/// The ten example users, with ids 1 to 10 in table order.
#[must_use]
pub fn example_users() -> Vec<User> {
    (1..)
        .zip(EXAMPLE_USERS)
        .map(|(id, (name, email, role, status))| {
            User::new(
                UserId::new(id),
                NewUser {
                    name: name.to_owned(),
                    email: email.to_owned(),
                    role,
                    status,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;
    use crate::domain::{RuleContext, UserDraft, validate_user};

    #[rstest]
    fn ids_run_from_one_to_ten() {
        let ids: Vec<u64> = example_users().iter().map(|user| user.id().get()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[rstest]
    fn emails_are_unique_ignoring_case() {
        let users = example_users();
        let emails: HashSet<String> = users
            .iter()
            .map(|user| user.email().to_lowercase())
            .collect();
        assert_eq!(emails.len(), users.len());
    }

    #[rstest]
    fn every_example_passes_edit_validation() {
        let users = example_users();
        for user in &users {
            let ctx = RuleContext::editing(&users, Some(user));
            let record = validate_user(&UserDraft::from_user(user), &ctx)
                .unwrap_or_else(|errors| panic!("{} is invalid: {errors}", user.name()));
            assert_eq!(record.name, user.name());
        }
    }
}
