use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load environment variables for database connection: {0}")]
    ConnectionConfig(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("A row with this key already exists: {0}")]
    DuplicateKey(String),

    #[error("Referenced row does not exist: {0}")]
    ForeignKeyViolation(String),

    #[error("The requested data was not found in the database.")]
    NotFound,
}

impl DbError {
    /// Classifies a failed write so callers see the constraint that was
    /// violated instead of an opaque store error. Anything that is not a
    /// key or reference violation passes through unchanged.
    pub(crate) fn from_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    return DbError::DuplicateKey(db_err.message().to_string());
                }
                ErrorKind::ForeignKeyViolation => {
                    return DbError::ForeignKeyViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }
        DbError::Database(err)
    }
}
