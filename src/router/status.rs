//! Public configuration page for front-end identification.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Structured configuration.
#[derive(Serialize, Deserialize)]
pub struct Status {
    pub version: String,
    pub name: String,
}

/// Public server status (configuration).
pub async fn status(State(state): State<AppState>) -> Json<Status> {
    Json(Status {
        version: env!("CARGO_PKG_VERSION").into(),
        name: if state.config.name.is_empty() {
            env!("CARGO_CRATE_NAME").into()
        } else {
            state.config.name.clone()
        },
    })
}
