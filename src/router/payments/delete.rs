use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::ServerError;
use crate::AppState;
use crate::error::Result;
use crate::payment::PaymentRepository;

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Handler to delete a payment record.
pub async fn handler(
    State(state): State<AppState>,
    Path(payment_id): Path<i64>,
) -> Result<Json<Response>> {
    let deleted = PaymentRepository::new(state.db.sqlite.clone())
        .delete(payment_id)
        .await?;

    if deleted == 0 {
        return Err(ServerError::NotFound("Payment"));
    }

    Ok(Json(Response {
        message: "Payment deleted successfully".to_owned(),
    }))
}
