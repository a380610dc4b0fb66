use crate::domain::errors::StoreError;

/// Unique constraint on `links.code`.
pub const LINKS_CODE_CONSTRAINT: &str = "links_code_key";

pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(LINKS_CODE_CONSTRAINT))
}

/// Maps a SQLx error onto the store error taxonomy.
///
/// `key` names the record the failed statement was about, so duplicate-key
/// failures can report which code collided.
pub fn map_sqlx_error(e: sqlx::Error, key: &str) -> StoreError {
    if is_unique_violation_on_code(&e) {
        return StoreError::DuplicateKey(key.to_owned());
    }

    StoreError::Backend(e.to_string())
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        StoreError::Backend(e.to_string())
    }
}
