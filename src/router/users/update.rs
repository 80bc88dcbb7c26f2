use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ServerError;
use crate::AppState;
use crate::error::Result;
use crate::router::Valid;
use crate::user::{User, UserRepository};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(email(message = "Email must be formatted."))]
    pub email: Option<String>,
    #[validate(length(
        min = 4,
        max = 20,
        message = "Phone number must be 4 to 20 characters long."
    ))]
    pub phone_number: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub user: User,
}

/// Handler to update a user's contact details.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Valid(body): Valid<Body>,
) -> Result<Json<Response>> {
    if body.email.is_none() && body.phone_number.is_none() {
        return Err(ServerError::BadRequest(
            "Provide email or phone_number to update".to_owned(),
        ));
    }

    let repository = UserRepository::new(state.db.sqlite.clone());
    let updated = repository
        .update_contact(user_id, body.email.as_deref(), body.phone_number.as_deref())
        .await?;

    if updated == 0 {
        return Err(ServerError::NotFound("User"));
    }

    let user = repository
        .find_by_id(user_id)
        .await?
        .ok_or(ServerError::NotFound("User"))?;

    Ok(Json(Response {
        message: "User updated successfully".to_owned(),
        user,
    }))
}
