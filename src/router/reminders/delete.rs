use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::ServerError;
use crate::AppState;
use crate::error::Result;
use crate::reminder::ReminderRepository;

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Handler to dismiss a reminder.
pub async fn handler(
    State(state): State<AppState>,
    Path(reminder_id): Path<i64>,
) -> Result<Json<Response>> {
    let deleted = ReminderRepository::new(state.db.sqlite.clone())
        .delete(reminder_id)
        .await?;

    if deleted == 0 {
        return Err(ServerError::NotFound("Reminder"));
    }

    Ok(Json(Response {
        message: "Reminder deleted successfully".to_owned(),
    }))
}
