//! Error handler for utilipay.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sqlx::Error as SQLxError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::ledger::LedgerError;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Enum representing server-side errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("validation error occurred")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Axum(#[from] JsonRejection),

    #[error("SQL request failed: {0}")]
    Sql(#[from] SQLxError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("internal server error")]
    Crypto(#[from] crate::crypto::CryptoError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid credentials")]
    Unauthorized,
}

/// Every error leaves the server as `{"message": ...}` with a taxonomy of
/// status codes: 400 validation, 404 absent key, 409 uniqueness conflict,
/// 500 unclassified store errors.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, validation_message(errors))
            },
            ServerError::Axum(rejection) => {
                (StatusCode::BAD_REQUEST, rejection.body_text())
            },
            ServerError::Sql(err) => sql_status(err),
            ServerError::Ledger(err) => match err {
                LedgerError::BillNotFound => {
                    (StatusCode::NOT_FOUND, err.to_string())
                },
                LedgerError::AlreadyPaid | LedgerError::NonPositiveAmount => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                },
                LedgerError::Sql(err) => sql_status(err),
            },
            ServerError::Crypto(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            },
            ServerError::NotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            },
            ServerError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            ServerError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            },
            ServerError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            },
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(%message, "server returned 500 status");
        }

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Classify a store error: uniqueness violation is a conflict, broken
/// foreign key is a caller mistake, anything else is on us.
fn sql_status(err: &SQLxError) -> (StatusCode, String) {
    match err {
        SQLxError::RowNotFound => {
            (StatusCode::NOT_FOUND, "Resource not found".to_owned())
        },
        other => match other.as_database_error() {
            Some(db) if db.is_unique_violation() => {
                (StatusCode::CONFLICT, db.message().to_owned())
            },
            Some(db) if db.is_foreign_key_violation() => {
                (StatusCode::BAD_REQUEST, db.message().to_owned())
            },
            Some(db) => {
                (StatusCode::INTERNAL_SERVER_ERROR, db.message().to_owned())
            },
            None => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        },
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, issues)| {
            issues.iter().map(move |issue| match &issue.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for '{field}'."),
            })
        })
        .collect();
    messages.sort();
    messages.join(" ")
}
