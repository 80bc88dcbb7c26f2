use axum::extract::State;
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::payment::PaymentStatus;
use crate::router::Valid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    pub bill_id: i64,
    pub user_id: i64,
    #[validate(range(
        exclusive_min = 0.0,
        message = "Payment amount must be a positive number."
    ))]
    pub payment_amount: f64,
    #[validate(length(min = 1, max = 30, message = "Payment method is required."))]
    pub payment_method: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub payment_id: i64,
}

/// Handler to record a payment as the caller reports it. The paired bill
/// is marked paid whenever the payment lands as completed, without
/// checking the bill's prior state.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<Response>)> {
    let payment_id = Ledger::new(state.db.sqlite.clone())
        .add_payment(
            body.bill_id,
            body.user_id,
            body.payment_amount,
            &body.payment_method,
            PaymentStatus::Completed,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Response {
            message: "Payment successful".to_owned(),
            payment_id,
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
        "../../../fixtures/utilities.sql",
        "../../../fixtures/bills.sql"
    ))]
    async fn test_create_handler(pool: Pool<Sqlite>) {
        let app = app(router::state(pool.clone()));

        let response = make_request(
            app,
            Method::POST,
            "/payments",
            json!({
                "bill_id": 1,
                "user_id": 1,
                "payment_amount": 120.5,
                "payment_method": "upi",
            })
            .to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Response = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.message, "Payment successful");

        let status: String =
            sqlx::query_scalar(r#"SELECT status FROM bills WHERE bill_id = 1"#)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(status, "paid");
    }

    // the unchecked path settles the bill even on a partial amount.
    #[sqlx::test(fixtures(
        "../../../fixtures/users.sql",
        "../../../fixtures/utilities.sql",
        "../../../fixtures/bills.sql"
    ))]
    async fn test_create_partial_amount_settles(pool: Pool<Sqlite>) {
        let app = app(router::state(pool.clone()));

        let response = make_request(
            app,
            Method::POST,
            "/payments",
            json!({
                "bill_id": 1,
                "user_id": 1,
                "payment_amount": 20.0,
                "payment_method": "cash",
            })
            .to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let status: String =
            sqlx::query_scalar(r#"SELECT status FROM bills WHERE bill_id = 1"#)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(status, "paid");
    }

    #[sqlx::test(fixtures(
        "../../../fixtures/users.sql",
        "../../../fixtures/utilities.sql",
        "../../../fixtures/bills.sql"
    ))]
    async fn test_create_unknown_bill(pool: Pool<Sqlite>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::POST,
            "/payments",
            json!({
                "bill_id": 999,
                "user_id": 1,
                "payment_amount": 20.0,
                "payment_method": "cash",
            })
            .to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
