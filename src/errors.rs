use std::collections::BTreeMap;

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};
use thiserror::Error;

/// Field name to the list of messages reported for it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// What handlers hand back to axum on failure.
pub type ApiError = (StatusCode, Json<Value>);

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0:?}")]
    Validation(FieldErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Server error: {0}")]
    ServerError(String),
}

impl AppError {
    pub fn to_response(&self) -> ApiError {
        match self {
            AppError::BadRequest(msg) => detail(StatusCode::BAD_REQUEST, msg),
            AppError::Validation(fields) => (StatusCode::BAD_REQUEST, Json(json!(fields))),
            AppError::NotFound(msg) => detail(StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => detail(StatusCode::CONFLICT, msg),
            AppError::DatabaseError(msg) => detail(StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::ServerError(msg) => detail(StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }

    /// Unique violations, serialization failures and deadlocks clear up on a second attempt.
    pub fn is_retriable(&self) -> bool {
        matches!(self, AppError::Conflict(_))
    }
}

fn detail(status: StatusCode, msg: &str) -> ApiError {
    (status, Json(json!({ "detail": msg })))
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // 23505 unique_violation, 40001 serialization_failure, 40P01 deadlock_detected
            if let Some(code) = db_err.code() {
                if matches!(code.as_ref(), "23505" | "40001" | "40P01") {
                    return AppError::Conflict(db_err.message().to_string());
                }
            }
        }
        AppError::DatabaseError(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::DatabaseError(format!("Failed to run migrations: {}", err))
    }
}
