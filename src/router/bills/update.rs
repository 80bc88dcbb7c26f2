use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ServerError;
use crate::AppState;
use crate::bill::{BillRepository, BillStatus};
use crate::error::Result;
use crate::router::Valid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(range(exclusive_min = 0.0, message = "Amount must be a positive number."))]
    pub amount: Option<f64>,
    #[validate(length(min = 1, max = 30, message = "Due date is required."))]
    pub due_date: Option<String>,
    pub status: Option<BillStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Handler to correct a bill. Setting `status` back to `pending` reopens
/// a paid bill without touching its payment history.
pub async fn handler(
    State(state): State<AppState>,
    Path(bill_id): Path<i64>,
    Valid(body): Valid<Body>,
) -> Result<Json<Response>> {
    if body.amount.is_none() && body.due_date.is_none() && body.status.is_none() {
        return Err(ServerError::BadRequest("No fields to update.".to_owned()));
    }

    let updated = BillRepository::new(state.db.sqlite.clone())
        .update(bill_id, body.amount, body.due_date.as_deref(), body.status)
        .await?;

    if updated == 0 {
        return Err(ServerError::NotFound("Bill"));
    }

    Ok(Json(Response {
        message: "Bill updated successfully".to_owned(),
    }))
}
