use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::ServerError;
use crate::AppState;
use crate::bill::BillRepository;
use crate::error::Result;

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Handler to delete a bill.
pub async fn handler(
    State(state): State<AppState>,
    Path(bill_id): Path<i64>,
) -> Result<Json<Response>> {
    let deleted = BillRepository::new(state.db.sqlite.clone())
        .delete(bill_id)
        .await?;

    if deleted == 0 {
        return Err(ServerError::NotFound("Bill"));
    }

    Ok(Json(Response {
        message: "Bill deleted successfully".to_owned(),
    }))
}
