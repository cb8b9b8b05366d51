//! Error mapping for the SQLite backend.

use movievault_core::storage::RepositoryError;

/// Maps a tokio_rusqlite error to a repository error.
pub fn map_sqlite_error(error: tokio_rusqlite::Error) -> RepositoryError {
    match error {
        tokio_rusqlite::Error::ConnectionClosed => {
            RepositoryError::ConnectionFailed("connection closed".to_string())
        }
        other => RepositoryError::QueryFailed(other.to_string()),
    }
}
