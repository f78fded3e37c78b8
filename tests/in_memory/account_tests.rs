//! In-memory integration tests for accounts and caller resolution.

use super::helpers::Services;
use rstest::{fixture, rstest};
use tasktrack::{
    account::{
        domain::AccountDomainError,
        services::{AccountServiceError, LoginRequest, RegisterRequest, UpdateProfileRequest},
    },
    identity::domain::IdentityError,
};

#[fixture]
fn services() -> Services {
    Services::new()
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_user_is_resolved_from_token(services: Services) -> eyre::Result<()> {
    let session = services
        .accounts
        .register(RegisterRequest::new("Ada", "ada@example.com", "s3cret!"))
        .await?;

    let header = bearer(session.credential.token());
    let resolved = services.gate.authenticate(Some(&header)).await?;
    eyre::ensure!(resolved == session.user.id);
    Ok(())
}

#[rstest]
#[case::blank_name(RegisterRequest::new("  ", "ada@example.com", "pw"), "name")]
#[case::blank_email(RegisterRequest::new("Ada", "", "pw"), "email")]
#[case::blank_password(RegisterRequest::new("Ada", "ada@example.com", ""), "password")]
#[tokio::test(flavor = "multi_thread")]
async fn registration_requires_every_field(
    services: Services,
    #[case] request: RegisterRequest,
    #[case] field: &str,
) -> eyre::Result<()> {
    let result = services.accounts.register(request).await;
    eyre::ensure!(
        matches!(
            result,
            Err(AccountServiceError::Domain(AccountDomainError::MissingField(missing)))
                if missing == field
        ),
        "expected missing {field}, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn email_change_cannot_take_another_address(services: Services) -> eyre::Result<()> {
    services
        .accounts
        .register(RegisterRequest::new("Ada", "ada@example.com", "pw-one"))
        .await?;
    let bob = services
        .accounts
        .register(RegisterRequest::new("Bob", "bob@example.com", "pw-two"))
        .await?;

    let taken = services
        .accounts
        .update_profile(
            bob.user.id,
            UpdateProfileRequest::new().with_email("ada@example.com"),
        )
        .await;
    eyre::ensure!(
        matches!(taken, Err(AccountServiceError::Repository(_))),
        "expected duplicate email rejection, got {taken:?}"
    );

    let unchanged = services
        .accounts
        .update_profile(
            bob.user.id,
            UpdateProfileRequest::new().with_email("bob@example.com"),
        )
        .await?;
    eyre::ensure!(unchanged.email.as_str() == "bob@example.com");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn password_change_takes_effect_on_login(services: Services) -> eyre::Result<()> {
    let session = services
        .accounts
        .register(RegisterRequest::new("Ada", "ada@example.com", "old-password"))
        .await?;
    services
        .accounts
        .update_profile(
            session.user.id,
            UpdateProfileRequest::new().with_password("new-password"),
        )
        .await?;

    let stale = services
        .accounts
        .login(LoginRequest::new("ada@example.com", "old-password"))
        .await;
    eyre::ensure!(matches!(stale, Err(AccountServiceError::InvalidCredentials)));

    services
        .accounts
        .login(LoginRequest::new("ada@example.com", "new-password"))
        .await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_account_token_stops_resolving(services: Services) -> eyre::Result<()> {
    let session = services
        .accounts
        .register(RegisterRequest::new("Ada", "ada@example.com", "pw"))
        .await?;
    services.accounts.delete_account(session.user.id).await?;

    let header = bearer(session.credential.token());
    let result = services.gate.authenticate(Some(&header)).await;
    eyre::ensure!(matches!(result, Err(IdentityError::UnknownUser(_))));
    Ok(())
}
