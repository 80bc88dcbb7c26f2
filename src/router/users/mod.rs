//! Users-related HTTP API.
mod get;
mod update;

use axum::Router;
use axum::routing::get as get_method;

use crate::AppState;
use crate::router::{bills, payments, reminders};

pub fn router() -> Router<AppState> {
    Router::new()
        // `GET/PUT /users/{user_id}` to read or update a profile.
        .route(
            "/{user_id}",
            get_method(get::handler).put(update::handler),
        )
        // per-user listings live under the owning user.
        .route("/{user_id}/bills", get_method(bills::list::handler))
        .route("/{user_id}/payments", get_method(payments::list::handler))
        .route("/{user_id}/reminders", get_method(reminders::list::handler))
}
