//! Tests for account value objects and the user aggregate.

use crate::account::domain::{
    AccountDomainError, EmailAddress, PasswordHash, User, UserChanges, UserName,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
fn user(clock: DefaultClock) -> User {
    User::new(
        UserName::new("Ana").expect("valid name"),
        EmailAddress::new("ana@example.com").expect("valid email"),
        PasswordHash::from_encoded("sha256$1$00$00".to_owned()),
        &clock,
    )
}

#[rstest]
#[case("ana@example.com")]
#[case("first.last+tag@mail.example.org")]
#[case("  padded@example.com  ")]
fn email_accepts_local_at_domain_tld(#[case] raw: &str) {
    let email = EmailAddress::new(raw).expect("email should be accepted");
    assert_eq!(email.as_str(), raw.trim());
}

#[rstest]
#[case("not-an-email")]
#[case("missing-tld@example")]
#[case("two@@example.com")]
#[case("spaces in@example.com")]
#[case("@example.com")]
fn email_rejects_malformed_values(#[case] raw: &str) {
    assert_eq!(
        EmailAddress::new(raw),
        Err(AccountDomainError::InvalidEmailFormat(raw.to_owned()))
    );
}

#[rstest]
fn email_rejects_blank_value() {
    assert_eq!(
        EmailAddress::new("   "),
        Err(AccountDomainError::MissingField("email"))
    );
}

#[rstest]
fn email_equality_is_case_sensitive() {
    let lower = EmailAddress::new("ana@example.com").expect("valid email");
    let upper = EmailAddress::new("Ana@example.com").expect("valid email");
    assert_ne!(lower, upper);
}

#[rstest]
fn name_rejects_blank_value() {
    assert_eq!(UserName::new(""), Err(AccountDomainError::MissingField("name")));
}

#[rstest]
fn password_hash_debug_is_redacted() {
    let hash = PasswordHash::from_encoded("sha256$4096$abcd$ef01".to_owned());
    assert_eq!(format!("{hash:?}"), "PasswordHash(<redacted>)");
}

#[rstest]
fn profile_serialisation_omits_password_hash(user: User) {
    let json = serde_json::to_value(user.profile()).expect("profile should serialise");

    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@example.com");
    assert!(json.get("password_hash").is_none());
    assert!(json.get("passwordHash").is_none());
}

#[rstest]
fn apply_keeps_omitted_fields(mut user: User, clock: DefaultClock) {
    let original_email = user.email().clone();
    let original_hash = user.password_hash().clone();
    let changes = UserChanges {
        name: Some(UserName::new("Ana Maria").expect("valid name")),
        ..UserChanges::default()
    };

    user.apply(changes, &clock);

    assert_eq!(user.name().as_str(), "Ana Maria");
    assert_eq!(user.email(), &original_email);
    assert_eq!(user.password_hash(), &original_hash);
    assert!(user.updated_at() >= user.created_at());
}
