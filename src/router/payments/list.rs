use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::Result;
use crate::payment::{Payment, PaymentRepository};

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub payments: Vec<Payment>,
}

/// Handler to list a user's payments, most recent first.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Response>> {
    let payments = PaymentRepository::new(state.db.sqlite.clone())
        .by_user(user_id)
        .await?;

    Ok(Json(Response { payments }))
}
