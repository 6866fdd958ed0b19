//! Tests for user form validation.

use rstest::{fixture, rstest};

use super::*;
use crate::domain::user::UserId;

fn user(id: u64, name: &str, email: &str, role: Role, status: Status) -> User {
    User::new(
        UserId::new(id),
        NewUser {
            name: name.to_owned(),
            email: email.to_owned(),
            role,
            status,
        },
    )
}

#[fixture]
fn directory() -> Vec<User> {
    vec![
        user(1, "John Doe", "john@example.com", Role::Admin, Status::Active),
        user(2, "Jane Smith", "jane@example.com", Role::User, Status::Active),
        user(3, "Bob Johnson", "bob@example.com", Role::User, Status::Inactive),
    ]
}

fn draft(name: &str, email: &str, role: &str, status: &str) -> UserDraft {
    UserDraft {
        name: name.to_owned(),
        email: email.to_owned(),
        role: role.to_owned(),
        status: status.to_owned(),
    }
}

#[rstest]
#[case("test@example.com")]
#[case("user.name@domain.co.uk")]
#[case("user+tag@example.org")]
#[case("user123@test-domain.com")]
#[case("user_name@example.com")]
#[case("user-name@example.com")]
#[case("user.name@example.com")]
#[case("user+name@example.com")]
#[case("user%name@example.com")]
fn accepts_well_formed_addresses(#[case] email: &str) {
    assert!(validate_email_format(email), "{email} should be valid");
}

#[rstest]
#[case("invalid-email")]
#[case("@example.com")]
#[case("user@")]
#[case("user@.com")]
#[case("user..name@example.com")]
#[case(".user@example.com")]
#[case("user.@example.com")]
#[case("user@example.")]
#[case("user@example..com")]
#[case("user name@example.com")]
#[case("user@example com")]
#[case("user@-example.com")]
#[case("user@example-.com")]
fn rejects_malformed_addresses(#[case] email: &str) {
    assert!(!validate_email_format(email), "{email} should be invalid");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("a@b")]
#[case("a@b.c")]
#[case(" test@example.com")]
#[case("test@example.com ")]
fn rejects_edge_cases(#[case] email: &str) {
    assert!(!validate_email_format(email));
}

#[rstest]
fn unique_address_is_free_when_adding(directory: Vec<User>) {
    assert!(validate_email_uniqueness(
        "new@example.com",
        &directory,
        FormMode::Add,
        None
    ));
}

#[rstest]
fn duplicate_address_is_taken_when_adding(directory: Vec<User>) {
    assert!(!validate_email_uniqueness(
        "john@example.com",
        &directory,
        FormMode::Add,
        None
    ));
}

#[rstest]
fn collisions_ignore_case(directory: Vec<User>) {
    assert!(!validate_email_uniqueness(
        "JOHN@EXAMPLE.COM",
        &directory,
        FormMode::Add,
        None
    ));
}

#[rstest]
fn editing_user_may_keep_own_address(directory: Vec<User>) {
    let current = directory.first().cloned();
    assert!(validate_email_uniqueness(
        "john@example.com",
        &directory,
        FormMode::Edit,
        current.as_ref()
    ));
}

#[rstest]
fn editing_user_may_not_take_another_address(directory: Vec<User>) {
    let current = directory.first().cloned();
    assert!(!validate_email_uniqueness(
        "Jane@Example.com",
        &directory,
        FormMode::Edit,
        current.as_ref()
    ));
}

#[rstest]
fn editing_user_may_switch_to_unused_address(directory: Vec<User>) {
    let current = directory.first().cloned();
    assert!(validate_email_uniqueness(
        "new@example.com",
        &directory,
        FormMode::Edit,
        current.as_ref()
    ));
}

#[rstest]
fn empty_directory_has_no_collisions() {
    assert!(validate_email_uniqueness(
        "test@example.com",
        &[],
        FormMode::Add,
        None
    ));
}

#[rstest]
fn every_field_has_rules() {
    for field in UserField::ALL {
        assert!(rules_for(field).next().is_some(), "{field} has no rules");
    }
}

#[rstest]
fn rule_names_are_unique_per_field() {
    for field in UserField::ALL {
        let names: Vec<_> = rules_for(field).map(|rule| rule.name).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len(), "duplicate rule name on {field}");
    }
}

#[rstest]
#[case("", Some("Name is required"))]
#[case("   ", Some("Name is required"))]
#[case("A", Some("Name must be at least 2 characters"))]
#[case("Al", None)]
#[case("Mary Jane", None)]
#[case("R2D2", Some("Name can only contain letters and spaces"))]
#[case("O'Brien", Some("Name can only contain letters and spaces"))]
fn name_rules_report_first_failure(#[case] name: &str, #[case] expected: Option<&str>) {
    let ctx = RuleContext::adding(&[]);
    assert_eq!(validate_field(UserField::Name, name, &ctx), expected);
}

#[rstest]
fn name_length_boundaries() {
    let ctx = RuleContext::adding(&[]);
    let longest = "a".repeat(NAME_MAX);
    let too_long = "a".repeat(NAME_MAX + 1);
    assert_eq!(validate_field(UserField::Name, &longest, &ctx), None);
    assert_eq!(
        validate_field(UserField::Name, &too_long, &ctx),
        Some("Name must be less than 50 characters")
    );
}

#[rstest]
#[case("", Some("Email is required"))]
#[case("not-an-email", Some("Please enter a valid email address"))]
#[case("john@example.com", Some("Email already exists"))]
#[case("al@ex.com", None)]
fn email_rules_report_first_failure(
    directory: Vec<User>,
    #[case] email: &str,
    #[case] expected: Option<&str>,
) {
    let ctx = RuleContext::adding(&directory);
    assert_eq!(validate_field(UserField::Email, email, &ctx), expected);
}

#[rstest]
fn overlong_email_is_rejected() {
    let ctx = RuleContext::adding(&[]);
    let email = format!("{}@example.com", "a".repeat(60));
    let long_domain = format!("user@{}.com", ["abcdefghij"; 10].join("."));
    assert_eq!(validate_field(UserField::Email, &email, &ctx), None);
    assert_eq!(
        validate_field(UserField::Email, &long_domain, &ctx),
        Some("Email must be less than 100 characters")
    );
}

#[rstest]
#[case(UserField::Role, "Owner", Some("Invalid role"))]
#[case(UserField::Role, "Moderator", None)]
#[case(UserField::Status, "Suspended", Some("Invalid status"))]
#[case(UserField::Status, "Inactive", None)]
fn enum_fields_must_name_known_values(
    #[case] field: UserField,
    #[case] value: &str,
    #[case] expected: Option<&str>,
) {
    let ctx = RuleContext::adding(&[]);
    assert_eq!(validate_field(field, value, &ctx), expected);
}

#[rstest]
fn validate_user_collects_every_field_error(directory: Vec<User>) {
    let ctx = RuleContext::adding(&directory);
    let errors = validate_user(&draft("", "JANE@example.com", "Root", "Gone"), &ctx)
        .expect_err("draft is invalid");

    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get(UserField::Name), Some("Name is required"));
    assert_eq!(errors.get(UserField::Email), Some("Email already exists"));
    assert_eq!(errors.get(UserField::Role), Some("Invalid role"));
    assert_eq!(errors.get(UserField::Status), Some("Invalid status"));
}

#[rstest]
fn validate_user_trims_committed_text(directory: Vec<User>) {
    let ctx = RuleContext::adding(&directory);
    let record = validate_user(&draft(" Al ", "al@ex.com", "User", "Active"), &ctx)
        .expect("draft is valid");

    assert_eq!(
        record,
        NewUser {
            name: "Al".to_owned(),
            email: "al@ex.com".to_owned(),
            role: Role::User,
            status: Status::Active,
        }
    );
}

#[rstest]
fn padded_names_are_measured_after_trimming() {
    let ctx = RuleContext::adding(&[]);
    let padded_longest = format!("  {}  ", "a".repeat(NAME_MAX));
    let padded_too_long = format!(" {} ", "a".repeat(NAME_MAX + 1));

    assert_eq!(
        validate_field(UserField::Name, " A ", &ctx),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(validate_field(UserField::Name, &padded_longest, &ctx), None);
    assert_eq!(
        validate_field(UserField::Name, &padded_too_long, &ctx),
        Some("Name must be less than 50 characters")
    );
}

#[rstest]
fn validate_user_rejects_single_letter_after_trimming(directory: Vec<User>) {
    let ctx = RuleContext::adding(&directory);
    let errors = validate_user(&draft(" A ", "al@ex.com", "User", "Active"), &ctx)
        .expect_err("trimmed name is too short");

    assert_eq!(
        errors.get(UserField::Name),
        Some("Name must be at least 2 characters")
    );
}

#[rstest]
fn validate_user_in_edit_mode_allows_own_address(directory: Vec<User>) {
    let current = directory.first();
    let ctx = RuleContext::editing(&directory, current);
    let record = validate_user(
        &draft("John Doe", "John@Example.com", "Admin", "Inactive"),
        &ctx,
    )
    .expect("own address is allowed");
    assert_eq!(record.status, Status::Inactive);
}

#[rstest]
#[case("name", UserField::Name)]
#[case("email", UserField::Email)]
#[case("role", UserField::Role)]
#[case("status", UserField::Status)]
fn field_keys_parse(#[case] key: &str, #[case] field: UserField) {
    assert_eq!(key.parse::<UserField>(), Ok(field));
}
