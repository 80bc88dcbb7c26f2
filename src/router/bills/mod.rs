//! Bills-related HTTP API.
mod create;
mod delete;
mod get;
pub mod list;
mod update;

use axum::Router;
use axum::routing::{get as get_method, post};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `POST /bills` to issue a bill. Listing is under `/users`.
        .route("/", post(create::handler))
        // `GET/PUT/DELETE /bills/{bill_id}` for a single bill.
        .route(
            "/{bill_id}",
            get_method(get::handler)
                .put(update::handler)
                .delete(delete::handler),
        )
}
