use axum::extract::State;
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::bill::BillRepository;
use crate::error::Result;
use crate::router::Valid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    pub user_id: i64,
    pub utility_id: i64,
    #[validate(range(exclusive_min = 0.0, message = "Amount must be a positive number."))]
    pub amount: f64,
    #[validate(length(min = 1, max = 30, message = "Due date is required."))]
    pub due_date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub bill_id: i64,
}

/// Handler to issue a pending bill against a user and utility.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<Response>)> {
    let bill_id = BillRepository::new(state.db.sqlite.clone())
        .insert(body.user_id, body.utility_id, body.amount, &body.due_date)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Response {
            message: "Bill created successfully".to_owned(),
            bill_id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::json;
    use sqlx::{Pool, Sqlite};

    use super::*;
    use crate::*;

    #[sqlx::test(fixtures(
        "../../../fixtures/users.sql",
        "../../../fixtures/utilities.sql"
    ))]
    async fn test_create_handler(pool: Pool<Sqlite>) {
        let app = app(router::state(pool.clone()));

        let response = make_request(
            app,
            Method::POST,
            "/bills",
            json!({
                "user_id": 1,
                "utility_id": 2,
                "amount": 45.5,
                "due_date": "2026-02-01",
            })
            .to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Response = serde_json::from_slice(&body).unwrap();

        let status: String =
            sqlx::query_scalar(r#"SELECT status FROM bills WHERE bill_id = ?"#)
                .bind(body.bill_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(status, "pending");
    }

    #[sqlx::test(fixtures(
        "../../../fixtures/users.sql",
        "../../../fixtures/utilities.sql"
    ))]
    async fn test_create_negative_amount(pool: Pool<Sqlite>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::POST,
            "/bills",
            json!({
                "user_id": 1,
                "utility_id": 2,
                "amount": -45.5,
                "due_date": "2026-02-01",
            })
            .to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(fixtures(
        "../../../fixtures/users.sql",
        "../../../fixtures/utilities.sql"
    ))]
    async fn test_create_unknown_utility(pool: Pool<Sqlite>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::POST,
            "/bills",
            json!({
                "user_id": 1,
                "utility_id": 999,
                "amount": 45.5,
                "due_date": "2026-02-01",
            })
            .to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
