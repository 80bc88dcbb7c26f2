//! Payments-related HTTP API.
mod create;
mod delete;
mod get;
pub mod list;
mod process;
mod update;

use axum::Router;
use axum::routing::{get as get_method, post};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `POST /payments` records a payment and settles the bill.
        .route("/", post(create::handler))
        // `POST /payments/process/{user_id}` is the checked settlement path.
        .route("/process/{user_id}", post(process::handler))
        // `GET/PUT/DELETE /payments/{payment_id}` for a single payment.
        .route(
            "/{payment_id}",
            get_method(get::handler)
                .put(update::handler)
                .delete(delete::handler),
        )
}
