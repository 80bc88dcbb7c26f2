use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ServerError;
use crate::AppState;
use crate::error::Result;
use crate::router::Valid;
use crate::utility::UtilityRepository;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(min = 1, max = 100, message = "Utility name is required."))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 500, message = "Description is required."))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Provider name is required."))]
    pub provider_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Handler to update a utility provider.
pub async fn handler(
    State(state): State<AppState>,
    Path(utility_id): Path<i64>,
    Valid(body): Valid<Body>,
) -> Result<Json<Response>> {
    if body.name.is_none() && body.description.is_none() && body.provider_name.is_none()
    {
        return Err(ServerError::BadRequest("No fields to update.".to_owned()));
    }

    let updated = UtilityRepository::new(state.db.sqlite.clone())
        .update(
            utility_id,
            body.name.as_deref(),
            body.description.as_deref(),
            body.provider_name.as_deref(),
        )
        .await?;

    if updated == 0 {
        return Err(ServerError::NotFound("Utility"));
    }

    Ok(Json(Response {
        message: "Utility updated successfully".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::{Pool, Sqlite};

    use crate::*;

    #[sqlx::test(fixtures("../../../fixtures/utilities.sql"))]
    async fn test_update_handler(pool: Pool<Sqlite>) {
        let app = app(router::state(pool.clone()));

        let response = make_request(
            app,
            Method::PUT,
            "/utilities/1",
            json!({ "provider_name": "New Power Co." }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let provider: String = sqlx::query_scalar(
            r#"SELECT provider_name FROM utilities WHERE utility_id = 1"#,
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(provider, "New Power Co.");
    }

    #[sqlx::test(fixtures("../../../fixtures/utilities.sql"))]
    async fn test_update_without_fields(pool: Pool<Sqlite>) {
        let app = app(router::state(pool));

        let response =
            make_request(app, Method::PUT, "/utilities/1", json!({}).to_string())
                .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(fixtures("../../../fixtures/utilities.sql"))]
    async fn test_update_unknown_utility(pool: Pool<Sqlite>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::PUT,
            "/utilities/999",
            json!({ "name": "Ghost" }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
