//! Authentication HTTP API.
mod login;
mod logout;
mod register;

use axum::Router;
use axum::routing::post;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `POST /auth/login` goes to `login`.
        .route("/login", post(login::handler))
        // `POST /auth/register` goes to `register`.
        .route("/register", post(register::handler))
        // `POST /auth/logout` goes to `logout`.
        .route("/logout", post(logout::handler))
}
