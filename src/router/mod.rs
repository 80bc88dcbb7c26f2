//! HTTP routes.

pub mod admin;
pub mod auth;
pub mod bills;
pub mod payments;
pub mod reminders;
pub mod status;
pub mod users;
pub mod utilities;

use std::sync::LazyLock;

use axum::Json;
use axum::extract::{FromRequest, Request};
use regex_lite::Regex;
use validator::{Validate, ValidationError};

use crate::ServerError;

static PAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());
static AADHAAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{12}$").unwrap());

/// Validate a PAN number (example format: ABCDE1234F).
pub fn validate_pan(pan: &str) -> Result<(), ValidationError> {
    if PAN.is_match(pan) {
        Ok(())
    } else {
        Err(ValidationError::new("pan"))
    }
}

/// Validate an Aadhaar number (12 digits).
pub fn validate_aadhaar(aadhaar: &str) -> Result<(), ValidationError> {
    if AADHAAR.is_match(aadhaar) {
        Ok(())
    } else {
        Err(ValidationError::new("aadhaar"))
    }
}

/// JSON extractor running `validator` checks after deserialization.
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ServerError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Application state backed by a test pool.
#[cfg(test)]
pub(crate) fn state(pool: sqlx::SqlitePool) -> crate::AppState {
    use std::sync::Arc;

    // cheap argon2 parameters, tests hash a lot.
    let argon2 = crate::config::Argon2 {
        memory_cost: 1024,
        iterations: 1,
        parallelism: 1,
        hash_length: 32,
    };

    crate::AppState {
        config: Arc::new(crate::config::Configuration::default()),
        db: crate::database::Database { sqlite: pool },
        crypto: Arc::new(
            crate::crypto::PasswordManager::new(Some(argon2)).unwrap(),
        ),
        admin: Arc::new(crate::middleware::StaticCredentials::new(
            crate::config::Admin::default(),
        )),
    }
}
