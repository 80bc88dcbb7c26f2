use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::router::Valid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    pub bill_id: i64,
    pub amount: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Handler for the checked settlement path. The ledger refuses absent
/// bills, settled bills, and non-positive amounts before writing.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Valid(body): Valid<Body>,
) -> Result<Json<Response>> {
    let payment = Ledger::new(state.db.sqlite.clone())
        .record_payment(user_id, body.bill_id, body.amount)
        .await?;

    Ok(Json(Response {
        message: format!(
            "Payment of {} recorded for Bill ID {}.",
            payment.amount, payment.bill_id
        ),
    }))
}
