use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::ServerError;
use crate::AppState;
use crate::error::Result;
use crate::utility::UtilityRepository;

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Handler to delete a utility provider.
pub async fn handler(
    State(state): State<AppState>,
    Path(utility_id): Path<i64>,
) -> Result<Json<Response>> {
    let deleted = UtilityRepository::new(state.db.sqlite.clone())
        .delete(utility_id)
        .await?;

    if deleted == 0 {
        return Err(ServerError::NotFound("Utility"));
    }

    Ok(Json(Response {
        message: "Utility deleted successfully".to_owned(),
    }))
}
