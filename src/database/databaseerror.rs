use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("problem opening sqlite3 file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: sqlx::Error
    },

    #[error("problem with ping against sqlite3 file {path}: {source}")]
    Ping {
        path: String,
        #[source]
        source: sqlx::Error
    },

    #[error("migration #{index} [{excerpt}...] had problem: {source}")]
    Migration {
        index: usize,
        excerpt: String,
        #[source]
        source: sqlx::Error
    }
}
