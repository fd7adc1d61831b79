use std::env;

use sqlx::Connection;
use sqlx::sqlite::{
    SqliteConnectOptions,
    SqlitePool
};
use tracing::{
    error,
    info,
    warn
};

use super::databaseerror::DatabaseError;

/// Environment variable naming the sqlite file to open.
pub const SQLITE_DB_PATH: &str = "SQLITE_DB_PATH";

/// Characters of a failing statement quoted in errors and logs.
const EXCERPT_LEN: usize = 40;

/// Rejects paths that try to break out of the working directory.
pub fn validate_path(path: &str) -> Option<&str> {
    if path.contains("..") {
        None
    } else {
        Some(path)
    }
}

/// The sqlite path from `SQLITE_DB_PATH`, if set and safe.
pub fn env_path() -> Option<String> {
    let path = env::var(SQLITE_DB_PATH).ok()?;
    match validate_path(&path) {
        Some(valid) => Some(valid.to_owned()),
        None => {
            warn!(path = %path, "ignoring {SQLITE_DB_PATH} outside the local path");
            None
        }
    }
}

/// Opens (creating if missing) the sqlite file at `path` and pings it.
pub async fn connect(path: &str) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await.map_err(|source| {
        let err = DatabaseError::Open { path: path.to_owned(), source };
        error!(error = %err, "sqlite");
        err
    })?;

    let mut conn = pool.acquire().await
        .map_err(|source| DatabaseError::Ping { path: path.to_owned(), source })?;
    conn.ping().await
        .map_err(|source| DatabaseError::Ping { path: path.to_owned(), source })?;

    Ok(pool)
}

/// Runs `migrations` in order, stopping at the first statement that fails.
pub async fn migrate<S>(pool: &SqlitePool, migrations: &[S]) -> Result<(), DatabaseError>
where
    S: AsRef<str>,
{
    info!("starting database migrations");
    for (index, migration) in migrations.iter().enumerate() {
        let statement = migration.as_ref();
        let result = sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|source| DatabaseError::Migration {
                index,
                excerpt: excerpt(statement),
                source
            })?;
        info!(
            migration = index,
            statement = %excerpt(statement),
            rows = result.rows_affected(),
            "migration changed rows"
        );
    }
    info!("finished migrations");
    Ok(())
}

fn excerpt(statement: &str) -> String {
    statement.chars().take(EXCERPT_LEN).collect()
}
