//! Middlewares for routes.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::Result;
use crate::{AppState, ServerError};

pub const USERNAME_HEADER: &str = "x-username";
pub const PASSWORD_HEADER: &str = "x-password";

/// Seam for the admin gate. Header comparison today, real authentication
/// later without touching handlers.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed username/password pair from the configuration file.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Create a new [`StaticCredentials`].
    pub fn new(config: crate::config::Admin) -> Self {
        Self {
            username: config.username,
            password: config.password,
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

fn header<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Middleware guarding the admin listing routes.
///
/// Any mismatch, including absent headers, yields 401.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response> {
    let headers = req.headers();
    let credentials =
        header(headers, USERNAME_HEADER).zip(header(headers, PASSWORD_HEADER));

    match credentials {
        Some((username, password))
            if state.admin.verify(username, password) =>
        {
            Ok(next.run(req).await)
        },
        _ => Err(ServerError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials() {
        let verifier = StaticCredentials::new(crate::config::Admin::default());

        assert!(verifier.verify("admin", "admin123"));
        assert!(!verifier.verify("admin", "admin124"));
        assert!(!verifier.verify("root", "admin123"));
        assert!(!verifier.verify("", ""));
    }
}
