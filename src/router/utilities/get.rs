use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::ServerError;
use crate::AppState;
use crate::error::Result;
use crate::utility::{Utility, UtilityRepository};

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub utility: Utility,
}

/// Handler to get a utility provider by its identifier.
pub async fn handler(
    State(state): State<AppState>,
    Path(utility_id): Path<i64>,
) -> Result<Json<Response>> {
    let utility = UtilityRepository::new(state.db.sqlite.clone())
        .find_by_id(utility_id)
        .await?
        .ok_or(ServerError::NotFound("Utility"))?;

    Ok(Json(Response { utility }))
}
