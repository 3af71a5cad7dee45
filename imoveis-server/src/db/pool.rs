//! Connection pool
//!
//! The pool is the only connection handle in the process; handlers reach it
//! through `PgStore`.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default `--max-connections`.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a pool of at most `max_connections` connections to `database_url`.
///
/// The first connection is opened eagerly, so an unreachable database or a
/// malformed URL fails here rather than on the first request.
///
/// ```ignore
/// let pool = create_pool("postgres://postgres@localhost:5433/prova_crud", 5).await?;
/// ```
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
