use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::ServerError;
use crate::AppState;
use crate::bill::{Bill, BillRepository};
use crate::error::Result;

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub bill: Bill,
}

/// Handler to get a bill by its identifier.
pub async fn handler(
    State(state): State<AppState>,
    Path(bill_id): Path<i64>,
) -> Result<Json<Response>> {
    let bill = BillRepository::new(state.db.sqlite.clone())
        .find_by_id(bill_id)
        .await?
        .ok_or(ServerError::NotFound("Bill"))?;

    Ok(Json(Response { bill }))
}
