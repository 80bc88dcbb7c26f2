use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::Result;
use crate::utility::{Utility, UtilityRepository};

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub utilities: Vec<Utility>,
}

/// Handler to list every registered utility provider.
pub async fn handler(State(state): State<AppState>) -> Result<Json<Response>> {
    let utilities = UtilityRepository::new(state.db.sqlite.clone())
        .all()
        .await?;

    Ok(Json(Response { utilities }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use sqlx::{Pool, Sqlite};

    use super::*;
    use crate::*;

    async fn fetch(state: AppState) -> Response {
        let response = make_request(
            app(state),
            Method::GET,
            "/utilities",
            String::new(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[sqlx::test(fixtures("../../../fixtures/utilities.sql"))]
    async fn test_list_handler(pool: Pool<Sqlite>) {
        let state = router::state(pool);

        let body = fetch(state).await;
        assert_eq!(body.utilities.len(), 4);
        assert_eq!(body.utilities[0].name, "Electricity");
    }

    // reads do not change what subsequent reads observe.
    #[sqlx::test(fixtures("../../../fixtures/utilities.sql"))]
    async fn test_list_is_stable(pool: Pool<Sqlite>) {
        let state = router::state(pool);

        let first = fetch(state.clone()).await;
        let second = fetch(state).await;
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
