//! Classification of SQLite errors.

/// Extended result code for a `PRIMARY KEY` constraint failure.
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
/// Extended result code for a `UNIQUE` constraint failure.
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";

/// Returns `true` if the error is a duplicate key on insert.
pub fn is_duplicate_key(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if db_err.is_unique_violation() {
        return true;
    }

    matches!(
        db_err.code().as_deref(),
        Some(SQLITE_CONSTRAINT_PRIMARYKEY) | Some(SQLITE_CONSTRAINT_UNIQUE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_duplicates() {
        assert!(!is_duplicate_key(&sqlx::Error::RowNotFound));
        assert!(!is_duplicate_key(&sqlx::Error::PoolTimedOut));
    }
}
