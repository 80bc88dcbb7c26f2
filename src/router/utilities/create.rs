use axum::extract::State;
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::error::Result;
use crate::router::Valid;
use crate::utility::UtilityRepository;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(min = 1, max = 100, message = "Utility name is required."))]
    pub name: String,
    #[validate(length(min = 1, max = 500, message = "Description is required."))]
    pub description: String,
    #[validate(length(min = 1, max = 100, message = "Provider name is required."))]
    pub provider_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub utility_id: i64,
}

/// Handler to register a utility provider.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<Response>)> {
    let utility_id = UtilityRepository::new(state.db.sqlite.clone())
        .insert(&body.name, &body.description, &body.provider_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Response {
            message: "Utility added successfully".to_owned(),
            utility_id,
        }),
    ))
}
