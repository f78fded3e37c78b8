//! Shared wiring for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use tasktrack::{
    account::{
        adapters::{Pbkdf2PasswordHasher, memory::InMemoryUserRepository},
        services::AccountService,
    },
    identity::{adapters::JwtCredentialService, services::IdentityGate},
    task::{
        adapters::memory::InMemoryTaskRepository,
        services::{TaskLifecycleService, TaskQueryService},
    },
};

/// Signing secret shared by the tests.
pub const SECRET: &[u8] = b"integration-tests-signing-secret-0123";

/// Credential service used by the tests.
pub type TestCredentials = JwtCredentialService<DefaultClock>;

/// Account service over in-memory storage.
pub type TestAccounts =
    AccountService<InMemoryUserRepository, Pbkdf2PasswordHasher, TestCredentials, DefaultClock>;

/// Services wired over shared in-memory repositories.
pub struct Services {
    /// Task lifecycle operations.
    pub lifecycle: TaskLifecycleService<InMemoryTaskRepository, DefaultClock>,
    /// Task listing.
    pub queries: TaskQueryService<InMemoryTaskRepository>,
    /// Account operations.
    pub accounts: TestAccounts,
    /// Caller resolution.
    pub gate: IdentityGate<TestCredentials, InMemoryUserRepository>,
}

impl Services {
    /// Wires every service over fresh repositories.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let credentials = Arc::new(JwtCredentialService::new(
            SECRET,
            chrono::Duration::minutes(30),
            Arc::clone(&clock),
        ));

        Self {
            lifecycle: TaskLifecycleService::new(Arc::clone(&tasks), Arc::clone(&clock)),
            queries: TaskQueryService::new(tasks),
            gate: IdentityGate::new(Arc::clone(&credentials), Arc::clone(&users)),
            accounts: AccountService::new(
                users,
                Arc::new(Pbkdf2PasswordHasher::new().with_rounds(8)),
                credentials,
                clock,
            ),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}
