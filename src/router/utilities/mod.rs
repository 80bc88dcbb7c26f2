//! Utilities-related HTTP API.
mod create;
mod delete;
mod get;
mod list;
mod update;

use axum::Router;
use axum::routing::get as get_method;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `GET/POST /utilities` to list or register providers.
        .route("/", get_method(list::handler).post(create::handler))
        // `GET/PUT/DELETE /utilities/{utility_id}` for a single provider.
        .route(
            "/{utility_id}",
            get_method(get::handler)
                .put(update::handler)
                .delete(delete::handler),
        )
}
