use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Stub for token invalidation; tokens are static strings.
pub async fn handler() -> Json<Response> {
    Json(Response {
        message: "Logout successful.".to_owned(),
    })
}
