use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::ServerError;
use crate::AppState;
use crate::error::Result;
use crate::user::{User, UserRepository};

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub user: User,
}

/// Handler to get a user by its identifier.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Response>> {
    let user = UserRepository::new(state.db.sqlite.clone())
        .find_by_id(user_id)
        .await?
        .ok_or(ServerError::NotFound("User"))?;

    Ok(Json(Response { user }))
}
