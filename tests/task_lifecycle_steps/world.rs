//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasktrack::{
    account::adapters::{Pbkdf2PasswordHasher, memory::InMemoryUserRepository},
    api::{ApiResponse, TaskTrackerApi, payloads::RegisterPayload},
    identity::adapters::JwtCredentialService,
    task::adapters::memory::InMemoryTaskRepository,
};

/// Handler type used by the BDD world.
pub type TestApi = TaskTrackerApi<
    InMemoryTaskRepository,
    InMemoryUserRepository,
    Pbkdf2PasswordHasher,
    JwtCredentialService<DefaultClock>,
    DefaultClock,
>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub api: TestApi,
    pub authorization: Option<String>,
    pub task_id: Option<String>,
    pub last_response: Option<ApiResponse>,
}

impl TaskLifecycleWorld {
    /// Creates a world over empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let api = TaskTrackerApi::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Pbkdf2PasswordHasher::new().with_rounds(4)),
            Arc::new(JwtCredentialService::new(
                b"bdd-scenarios-signing-secret-0123456789",
                chrono::Duration::minutes(15),
                Arc::clone(&clock),
            )),
            clock,
        );

        Self {
            api,
            authorization: None,
            task_id: None,
            last_response: None,
        }
    }

    /// Returns the signed-in user's authorization header.
    pub fn authorization(&self) -> Result<&str, eyre::Report> {
        self.authorization
            .as_deref()
            .ok_or_else(|| eyre::eyre!("no signed-in user in scenario world"))
    }

    /// Returns the id of the task under test.
    pub fn task_id(&self) -> Result<&str, eyre::Report> {
        self.task_id
            .as_deref()
            .ok_or_else(|| eyre::eyre!("no task in scenario world"))
    }

    /// Returns the most recent response.
    pub fn last_response(&self) -> Result<&ApiResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no response recorded in scenario world"))
    }

    /// Registers a user and returns its authorization header.
    pub fn sign_up(&self, email: &str) -> Result<String, eyre::Report> {
        let response = run_async(self.api.register(RegisterPayload {
            name: Some("Scenario user".to_owned()),
            email: Some(email.to_owned()),
            password: Some("correct horse battery".to_owned()),
        }));
        let token = response
            .body()
            .and_then(|body| body.get("token"))
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| eyre::eyre!("registration failed: {response:?}"))?;
        Ok(format!("Bearer {token}"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
