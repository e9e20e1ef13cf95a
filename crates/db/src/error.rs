//! Classification of sqlx errors into [`CoreError`] kinds.
//!
//! Decisions are made on the PostgreSQL SQLSTATE code, never on message text.

use bandroom_core::error::CoreError;

/// `unique_violation`
pub const UNIQUE_VIOLATION: &str = "23505";
/// `foreign_key_violation`
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Map a sqlx error raised while working on `entity` rows.
///
/// - unique violations become `Conflict`, naming the constraint
/// - foreign-key violations become `Validation`
/// - everything else becomes `Internal`
pub fn map_db_error(entity: &'static str, err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return CoreError::Conflict(format!(
                    "{entity} violates unique constraint {constraint}"
                ));
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                return CoreError::Validation(format!(
                    "{entity} references a parent that does not exist"
                ));
            }
            _ => {}
        }
    }
    tracing::error!(entity, error = %err, "Database error");
    CoreError::Internal(format!("database error on {entity}"))
}
