use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::ServerError;
use crate::AppState;
use crate::error::Result;
use crate::payment::{Payment, PaymentRepository};

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub payment: Payment,
}

/// Handler to get a payment by its identifier.
pub async fn handler(
    State(state): State<AppState>,
    Path(payment_id): Path<i64>,
) -> Result<Json<Response>> {
    let payment = PaymentRepository::new(state.db.sqlite.clone())
        .find_by_id(payment_id)
        .await?
        .ok_or(ServerError::NotFound("Payment"))?;

    Ok(Json(Response { payment }))
}
