//! Reminders-related HTTP API.
mod create;
mod delete;
pub mod list;

use axum::Router;
use axum::routing::{delete as delete_method, post};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `POST /reminders` schedules one. Listing is under `/users`.
        .route("/", post(create::handler))
        // `DELETE /reminders/{reminder_id}` dismisses one.
        .route("/{reminder_id}", delete_method(delete::handler))
}
