//! Shared `PostgreSQL` connection pool.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use thiserror::Error;

/// `PostgreSQL` connection pool shared by the Diesel repositories.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Errors raised while building the pool.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The pool size must be at least one.
    #[error("pool size must be at least one")]
    EmptyPool,

    /// The pool could not establish its initial connections.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

/// Builds a pool of at most `max_size` connections to `database_url`.
///
/// # Errors
///
/// Returns [`PersistenceError::EmptyPool`] when `max_size` is zero and
/// [`PersistenceError::Pool`] when the database cannot be reached.
pub fn build_pool(database_url: &str, max_size: u32) -> Result<PgPool, PersistenceError> {
    if max_size == 0 {
        return Err(PersistenceError::EmptyPool);
    }
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(Pool::builder().max_size(max_size).build(manager)?)
}
