use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ServerError;
use crate::AppState;
use crate::error::Result;
use crate::router::Valid;
use crate::user::UserRepository;

/// Static placeholder, not a capability.
pub const TOKEN: &str = "dummy_jwt_token_for_user";

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(min = 1, message = "Username and password are required."))]
    pub username: String,
    #[validate(length(min = 1, message = "Username and password are required."))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub token: String,
    pub user_id: i64,
}

/// Handler to login.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<Json<Response>> {
    let user = UserRepository::new(state.db.sqlite.clone())
        .find_by_username(&body.username)
        .await?;

    let Some(user) = user else {
        return Err(ServerError::Unauthorized);
    };

    if state
        .crypto
        .verify_password(&body.password, &user.password_hash)
        .is_err()
    {
        return Err(ServerError::Unauthorized);
    }

    Ok(Json(Response {
        message: "Login successful".to_owned(),
        token: TOKEN.to_owned(),
        user_id: user.user_id,
    }))
}
