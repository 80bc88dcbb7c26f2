use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::bill::{BillOverview, BillRepository, BillStatus};
use crate::error::Result;

#[derive(Debug, Deserialize)]
pub struct Params {
    pub status: Option<BillStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub bills: Vec<BillOverview>,
}

/// Handler to list a user's bills, optionally filtered by status.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(params): Query<Params>,
) -> Result<Json<Response>> {
    let bills = BillRepository::new(state.db.sqlite.clone())
        .by_user(user_id, params.status)
        .await?;

    Ok(Json(Response { bills }))
}
