use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ServerError;
use crate::AppState;
use crate::error::Result;
use crate::payment::{PaymentRepository, PaymentStatus};
use crate::router::Valid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    pub status: PaymentStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Handler to correct a payment's status. The paired bill is not
/// revisited; reopening it is the bill update's job.
pub async fn handler(
    State(state): State<AppState>,
    Path(payment_id): Path<i64>,
    Valid(body): Valid<Body>,
) -> Result<Json<Response>> {
    let updated = PaymentRepository::new(state.db.sqlite.clone())
        .update_status(payment_id, body.status)
        .await?;

    if updated == 0 {
        return Err(ServerError::NotFound("Payment"));
    }

    Ok(Json(Response {
        message: "Payment updated successfully".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::{Pool, Sqlite};

    use crate::*;

    #[sqlx::test(fixtures(
        "../../../fixtures/users.sql",
        "../../../fixtures/utilities.sql",
        "../../../fixtures/bills.sql",
        "../../../fixtures/payments.sql"
    ))]
    async fn test_update_handler(pool: Pool<Sqlite>) {
        let app = app(router::state(pool.clone()));

        let response = make_request(
            app,
            Method::PUT,
            "/payments/1",
            json!({ "status": "failed" }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let status: String = sqlx::query_scalar(
            r#"SELECT status FROM payments WHERE payment_id = 1"#,
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(status, "failed");

        // the bill stays settled.
        let bill: String =
            sqlx::query_scalar(r#"SELECT status FROM bills WHERE bill_id = 2"#)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(bill, "paid");
    }

    #[sqlx::test(fixtures(
        "../../../fixtures/users.sql",
        "../../../fixtures/utilities.sql",
        "../../../fixtures/bills.sql",
        "../../../fixtures/payments.sql"
    ))]
    async fn test_update_invalid_status(pool: Pool<Sqlite>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::PUT,
            "/payments/1",
            json!({ "status": "reversed" }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(fixtures(
        "../../../fixtures/users.sql",
        "../../../fixtures/utilities.sql",
        "../../../fixtures/bills.sql",
        "../../../fixtures/payments.sql"
    ))]
    async fn test_update_unknown_payment(pool: Pool<Sqlite>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::PUT,
            "/payments/999",
            json!({ "status": "failed" }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
