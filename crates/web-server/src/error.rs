use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DbError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] core_types::CoreError),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
    #[error("Configuration error: {0}")]
    Config(#[from] configuration::error::ConfigError),
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Validation failures and constraint violations carry their message to
/// the caller; anything else from the store is logged and redacted.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(core_err) => (StatusCode::BAD_REQUEST, core_err.to_string()),
            AppError::Database(db_err @ DbError::DuplicateKey(_)) => {
                (StatusCode::CONFLICT, db_err.to_string())
            }
            AppError::Database(db_err @ DbError::ForeignKeyViolation(_)) => {
                (StatusCode::CONFLICT, db_err.to_string())
            }
            AppError::Database(DbError::NotFound) => (
                StatusCode::NOT_FOUND,
                "The requested record was not found".to_string(),
            ),
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::Config(config_err) => {
                tracing::error!(error = ?config_err, "Configuration error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A server configuration error occurred".to_string(),
                )
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::CoreError;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = AppError::Validation(CoreError::InvalidInput(
            "room_price".to_string(),
            "must not be negative".to_string(),
        ));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn constraint_violations_map_to_conflict() {
        let dup = AppError::Database(DbError::DuplicateKey("room_type_pkey".to_string()));
        assert_eq!(status_of(dup), StatusCode::CONFLICT);

        let fk = AppError::Database(DbError::ForeignKeyViolation(
            "room_info_room_type_id_fkey".to_string(),
        ));
        assert_eq!(status_of(fk), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_records_map_to_not_found() {
        assert_eq!(
            status_of(AppError::NotFound("guest record not found".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Database(DbError::NotFound)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn other_store_failures_are_redacted_internal_errors() {
        let db_err = DbError::from(sqlx::Error::PoolTimedOut);
        let response = AppError::Database(db_err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
