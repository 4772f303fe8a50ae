//! Classification of SQLx errors into repository outcomes.

use crate::domain::repositories::RepositoryError;

/// Unique constraint guarding link names.
pub const LINK_NAME_CONSTRAINT: &str = "links_name_key";

/// Returns true if `e` violates the unique constraint on link names.
pub fn is_unique_violation_on_name(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(LINK_NAME_CONSTRAINT))
}

/// Returns true if `e` violates a check constraint (empty name or url).
pub fn is_check_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_check_violation())
}

/// Returns true for failures worth retrying on idempotent reads.
pub fn is_transient(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut)
}

/// Maps a failed write. `name` is the name the write tried to store.
pub fn classify_write(e: sqlx::Error, name: &str) -> RepositoryError {
    if is_unique_violation_on_name(&e) {
        return RepositoryError::Conflict(name.to_string());
    }

    if is_check_violation(&e) {
        let constraint = e
            .as_database_error()
            .and_then(|db_err| db_err.constraint())
            .unwrap_or("check")
            .to_string();
        return RepositoryError::Rejected(constraint);
    }

    RepositoryError::unavailable(e)
}
