//! Request handlers for the task and account surface.

use super::{
    error::ErrorKind,
    payloads::{
        CreateTaskPayload, ListTasksParams, LoginPayload, RegisterPayload, UpdateProfilePayload,
        UpdateTaskPayload,
    },
    response::ApiResponse,
};
use crate::account::{
    ports::{PasswordHasher, UserRepository},
    services::AccountService,
};
use crate::identity::{domain::UserId, ports::CredentialService, services::IdentityGate};
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{TaskLifecycleService, TaskQueryService},
};
use mockable::Clock;
use std::sync::Arc;

type Handled = Result<ApiResponse, ApiResponse>;

/// Handlers for every route, independent of any HTTP framework.
///
/// Each method takes the raw `Authorization` header value where the route is
/// authenticated, plus the decoded payload, and returns the response to send.
pub struct TaskTrackerApi<T, U, H, K, C>
where
    T: TaskRepository,
    U: UserRepository,
    H: PasswordHasher,
    K: CredentialService,
    C: Clock + Send + Sync,
{
    gate: IdentityGate<K, U>,
    tasks: TaskLifecycleService<T, C>,
    queries: TaskQueryService<T>,
    accounts: AccountService<U, H, K, C>,
}

impl<T, U, H, K, C> TaskTrackerApi<T, U, H, K, C>
where
    T: TaskRepository,
    U: UserRepository,
    H: PasswordHasher,
    K: CredentialService,
    C: Clock + Send + Sync,
{
    /// Wires the handlers over the given adapters.
    #[must_use]
    pub fn new(
        task_repository: Arc<T>,
        user_repository: Arc<U>,
        hasher: Arc<H>,
        credentials: Arc<K>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            gate: IdentityGate::new(Arc::clone(&credentials), Arc::clone(&user_repository)),
            tasks: TaskLifecycleService::new(Arc::clone(&task_repository), Arc::clone(&clock)),
            queries: TaskQueryService::new(task_repository),
            accounts: AccountService::new(user_repository, hasher, credentials, clock),
        }
    }

    /// `POST /tasks`: creates a task for the caller.
    pub async fn create_task(
        &self,
        authorization: Option<&str>,
        payload: CreateTaskPayload,
    ) -> ApiResponse {
        settle(async {
            let user_id = self.caller(authorization).await?;
            let task = self
                .tasks
                .create(user_id, payload.into())
                .await
                .map_err(|err| ApiResponse::error(&err))?;
            Ok(ApiResponse::created(&task))
        })
        .await
    }

    /// `GET /tasks`: lists the caller's tasks, newest first.
    pub async fn list_tasks(
        &self,
        authorization: Option<&str>,
        params: ListTasksParams,
    ) -> ApiResponse {
        settle(async {
            let user_id = self.caller(authorization).await?;
            let tasks = self
                .queries
                .list_for_user(user_id, params.into())
                .await
                .map_err(|err| ApiResponse::error(&err))?;
            Ok(ApiResponse::ok(&tasks))
        })
        .await
    }

    /// `GET /tasks/{id}`: returns one of the caller's tasks.
    pub async fn get_task(&self, authorization: Option<&str>, task_id: &str) -> ApiResponse {
        settle(async {
            let user_id = self.caller(authorization).await?;
            let id = parse_task_id(task_id)?;
            let task = self
                .tasks
                .get_by_id(id, user_id)
                .await
                .map_err(|err| ApiResponse::error(&err))?;
            Ok(ApiResponse::ok(&task))
        })
        .await
    }

    /// `PUT /tasks/{id}`: applies a partial update.
    pub async fn update_task(
        &self,
        authorization: Option<&str>,
        task_id: &str,
        payload: UpdateTaskPayload,
    ) -> ApiResponse {
        settle(async {
            let user_id = self.caller(authorization).await?;
            let id = parse_task_id(task_id)?;
            let task = self
                .tasks
                .update(id, user_id, payload.into())
                .await
                .map_err(|err| ApiResponse::error(&err))?;
            Ok(ApiResponse::ok(&task))
        })
        .await
    }

    /// `PUT /tasks/{id}/complete`: completes an in-progress task.
    pub async fn complete_task(&self, authorization: Option<&str>, task_id: &str) -> ApiResponse {
        settle(async {
            let user_id = self.caller(authorization).await?;
            let id = parse_task_id(task_id)?;
            let task = self
                .tasks
                .complete(id, user_id)
                .await
                .map_err(|err| ApiResponse::error(&err))?;
            Ok(ApiResponse::ok(&task))
        })
        .await
    }

    /// `DELETE /tasks/{id}`: deletes a completed task.
    pub async fn delete_task(&self, authorization: Option<&str>, task_id: &str) -> ApiResponse {
        settle(async {
            let user_id = self.caller(authorization).await?;
            let id = parse_task_id(task_id)?;
            self.tasks
                .delete(id, user_id)
                .await
                .map_err(|err| ApiResponse::error(&err))?;
            Ok(ApiResponse::no_content())
        })
        .await
    }

    /// `POST /auth/register`: creates an account and signs it in.
    pub async fn register(&self, payload: RegisterPayload) -> ApiResponse {
        match self.accounts.register(payload.into()).await {
            Ok(session) => ApiResponse::created(&session),
            Err(err) => ApiResponse::error(&err),
        }
    }

    /// `POST /auth/login`: signs in with email and password.
    pub async fn login(&self, payload: LoginPayload) -> ApiResponse {
        match self.accounts.login(payload.into()).await {
            Ok(session) => ApiResponse::ok(&session),
            Err(err) => ApiResponse::error(&err),
        }
    }

    /// `GET /auth/me`: returns the caller's profile.
    pub async fn me(&self, authorization: Option<&str>) -> ApiResponse {
        settle(async {
            let user_id = self.caller(authorization).await?;
            let profile = self
                .accounts
                .current_user(user_id)
                .await
                .map_err(|err| ApiResponse::error(&err))?;
            Ok(ApiResponse::ok(&profile))
        })
        .await
    }

    /// `PUT /users/me`: updates the caller's profile.
    pub async fn update_me(
        &self,
        authorization: Option<&str>,
        payload: UpdateProfilePayload,
    ) -> ApiResponse {
        settle(async {
            let user_id = self.caller(authorization).await?;
            let profile = self
                .accounts
                .update_profile(user_id, payload.into())
                .await
                .map_err(|err| ApiResponse::error(&err))?;
            Ok(ApiResponse::ok(&profile))
        })
        .await
    }

    /// `DELETE /users/me`: deletes the caller's account.
    pub async fn delete_me(&self, authorization: Option<&str>) -> ApiResponse {
        settle(async {
            let user_id = self.caller(authorization).await?;
            self.accounts
                .delete_account(user_id)
                .await
                .map_err(|err| ApiResponse::error(&err))?;
            Ok(ApiResponse::no_content())
        })
        .await
    }

    async fn caller(&self, authorization: Option<&str>) -> Result<UserId, ApiResponse> {
        self.gate
            .authenticate(authorization)
            .await
            .map_err(|err| ApiResponse::error(&err))
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, ApiResponse> {
    TaskId::parse(raw)
        .ok_or_else(|| ApiResponse::failure(ErrorKind::NotFound, format!("task not found: {raw}")))
}

async fn settle(handler: impl Future<Output = Handled>) -> ApiResponse {
    handler.await.unwrap_or_else(|response| response)
}
