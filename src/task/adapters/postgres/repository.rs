//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::identity::domain::UserId;
use crate::persistence::PgPool;
use crate::task::{
    domain::{
        PersistedTaskData, Task, TaskFilter, TaskId, TaskListQuery, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = NewTaskRow {
            id: task_id.into_inner(),
            user_id: task.owner().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status().as_str().to_owned(),
            due_date: task.due_date(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = TaskChangeset {
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status().as_str().to_owned(),
            due_date: task.due_date(),
            updated_at: task.updated_at(),
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, query: &TaskListQuery) -> TaskRepositoryResult<Vec<Task>> {
        let owner = query.owner().into_inner();
        let filter = query.filter().clone();
        self.run_blocking(move |connection| {
            let mut statement = tasks::table
                .filter(tasks::user_id.eq(owner))
                .select(TaskRow::as_select())
                .into_boxed();
            match filter {
                TaskFilter::All => {}
                TaskFilter::Status(status) => {
                    statement = statement.filter(tasks::status.eq(status.as_str()));
                }
                TaskFilter::Keyword(keyword) => {
                    let pattern = format!("%{}%", escape_like(&keyword));
                    statement = statement.filter(
                        tasks::title
                            .ilike(pattern.clone())
                            .or(tasks::description.ilike(pattern)),
                    );
                }
            }
            let rows = statement
                .order((tasks::created_at.desc(), tasks::id.asc()))
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        user_id,
        title,
        description,
        status: persisted_status,
        due_date,
        created_at,
        updated_at,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title: TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?,
        description,
        status,
        due_date,
        owner: UserId::from_uuid(user_id),
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}

/// Escapes `LIKE` metacharacters so the keyword matches literally.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
