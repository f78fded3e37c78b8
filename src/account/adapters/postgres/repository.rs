//! `PostgreSQL` repository implementation for user storage.

use super::{
    models::{NewUserRow, UserChangeset, UserRow},
    schema::users,
};
use crate::account::{
    domain::{EmailAddress, PasswordHash, PersistedUserData, User, UserName},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use crate::identity::domain::UserId;
use crate::persistence::PgPool;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let email = user.email().clone();
        let new_row = NewUserRow {
            id: user.id().into_inner(),
            name: user.name().as_str().to_owned(),
            email: email.as_str().to_owned(),
            password_hash: user.password_hash().as_str().to_owned(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_write_error(err, &email))?;
            Ok(())
        })
        .await
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let user_id = user.id();
        let email = user.email().clone();
        let changeset = UserChangeset {
            name: user.name().as_str().to_owned(),
            email: email.as_str().to_owned(),
            password_hash: user.password_hash().as_str().to_owned(),
            updated_at: user.updated_at(),
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(users::table.filter(users::id.eq(user_id.into_inner())))
                .set(&changeset)
                .execute(connection)
                .map_err(|err| map_write_error(err, &email))?;
            if affected == 0 {
                return Err(UserRepositoryError::NotFound(user_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(users::table.filter(users::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;
            if affected == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.into_inner()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let lookup = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::email.eq(lookup))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let UserRow {
        id,
        name,
        email,
        password_hash,
        created_at,
        updated_at,
    } = row;

    let data = PersistedUserData {
        id: UserId::from_uuid(id),
        name: UserName::new(name).map_err(UserRepositoryError::persistence)?,
        email: EmailAddress::new(email).map_err(UserRepositoryError::persistence)?,
        password_hash: PasswordHash::from_encoded(password_hash),
        created_at,
        updated_at,
    };
    Ok(User::from_persisted(data))
}

fn map_write_error(err: DieselError, email: &EmailAddress) -> UserRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_email_unique_violation(info.as_ref()) =>
        {
            UserRepositoryError::DuplicateEmail(email.clone())
        }
        _ => UserRepositoryError::persistence(err),
    }
}

fn is_email_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_users_email_unique")
}
