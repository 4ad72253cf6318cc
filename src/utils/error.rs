use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::ledger::LedgerError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Insufficient inventory: {0}")]
    InsufficientInventory(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error")]
    DatabaseError(#[source] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InsufficientInventory(_) => StatusCode::CONFLICT,
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InsufficientInventory(_) => "INSUFFICIENT_INVENTORY",
            AppError::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::InsufficientInventory(msg)
            | AppError::ConstraintViolation(msg) => {
                warn!(code = self.code(), message = %msg, "Request rejected");
            }
            AppError::DatabaseError(e) => {
                error!(error = ?e, "Database error");
            }
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Validation(msg) => AppError::ValidationError(msg),
            LedgerError::NotFound { .. } => AppError::NotFound(err.to_string()),
            LedgerError::InsufficientInventory { .. } => {
                AppError::InsufficientInventory(err.to_string())
            }
            LedgerError::ConstraintViolation(msg) => AppError::ConstraintViolation(msg),
            LedgerError::Database(e) => AppError::DatabaseError(e),
        }
    }
}

/// Malformed or incomplete request bodies are validation failures.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        LedgerError::from(err).into()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        let public_message = match &self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::InsufficientInventory(msg)
            | AppError::ConstraintViolation(msg) => msg.clone(),
            AppError::DatabaseError(_) => "A database error occurred".to_string(),
        };

        error_response(code, public_message, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_errors_map_to_http_statuses() {
        let cases = [
            (
                LedgerError::Validation("bad".into()),
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
            ),
            (
                LedgerError::event_not_found(9),
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
            ),
            (
                LedgerError::InsufficientInventory {
                    event_id: 1,
                    requested: 5,
                    available: 2,
                },
                StatusCode::CONFLICT,
                "INSUFFICIENT_INVENTORY",
            ),
            (
                LedgerError::ConstraintViolation("dup".into()),
                StatusCode::CONFLICT,
                "CONSTRAINT_VIOLATION",
            ),
            (
                LedgerError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
            ),
        ];

        for (ledger_err, status, code) in cases {
            let app_err = AppError::from(ledger_err);
            assert_eq!(app_err.status_code(), status);
            assert_eq!(app_err.code(), code);
        }
    }

    #[test]
    fn test_not_found_keeps_entity_in_message() {
        let app_err = AppError::from(LedgerError::user_not_found(12));
        match app_err {
            AppError::NotFound(msg) => assert_eq!(msg, "User with id 12 not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_database_errors_are_sanitized() {
        let response = AppError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
