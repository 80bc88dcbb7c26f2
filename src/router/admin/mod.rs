//! Admin-only HTTP API, every route behind the credential gate.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router, middleware as AxumMiddleware};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::bill::{BillOverview, BillRepository};
use crate::error::Result;
use crate::middleware::require_admin;
use crate::payment::{Payment, PaymentRepository};
use crate::user::{User, UserRepository};
use crate::utility::{Utility, UtilityRepository};

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(users))
        .route("/utilities", get(utilities))
        .route("/bills", get(bills))
        .route("/payments", get(payments))
        .route_layer(AxumMiddleware::from_fn_with_state(state, require_admin))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Users {
    pub users: Vec<User>,
}

/// Every registered user, hashes excluded by serialization.
async fn users(State(state): State<AppState>) -> Result<Json<Users>> {
    let users = UserRepository::new(state.db.sqlite.clone()).all().await?;

    Ok(Json(Users { users }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Utilities {
    pub utilities: Vec<Utility>,
}

async fn utilities(State(state): State<AppState>) -> Result<Json<Utilities>> {
    let utilities = UtilityRepository::new(state.db.sqlite.clone())
        .all()
        .await?;

    Ok(Json(Utilities { utilities }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Bills {
    pub bills: Vec<BillOverview>,
}

/// Every bill, same joined shape as the per-user listing.
async fn bills(State(state): State<AppState>) -> Result<Json<Bills>> {
    let bills = BillRepository::new(state.db.sqlite.clone()).all().await?;

    Ok(Json(Bills { bills }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Payments {
    pub payments: Vec<Payment>,
}

async fn payments(State(state): State<AppState>) -> Result<Json<Payments>> {
    let payments = PaymentRepository::new(state.db.sqlite.clone())
        .all()
        .await?;

    Ok(Json(Payments { payments }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use sqlx::{Pool, Sqlite};

    use crate::*;

    const ADMIN: &[(&str, &str)] =
        &[("x-username", "admin"), ("x-password", "admin123")];

    #[sqlx::test(fixtures(
        "../../../fixtures/users.sql",
        "../../../fixtures/utilities.sql",
        "../../../fixtures/bills.sql",
        "../../../fixtures/payments.sql"
    ))]
    async fn test_admin_listings(pool: Pool<Sqlite>) {
        let state = router::state(pool);

        for (path, key, count) in [
            ("/admin/users", "users", 5),
            ("/admin/utilities", "utilities", 4),
            ("/admin/bills", "bills", 6),
            ("/admin/payments", "payments", 1),
        ] {
            let response = make_request_with_headers(
                app(state.clone()),
                Method::GET,
                path,
                String::new(),
                ADMIN,
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK);

            let body =
                response.into_body().collect().await.unwrap().to_bytes();
            let body: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(body[key].as_array().unwrap().len(), count);
        }
    }

    #[sqlx::test(fixtures("../../../fixtures/users.sql"))]
    async fn test_admin_users_hide_hashes(pool: Pool<Sqlite>) {
        let state = router::state(pool);

        let response = make_request_with_headers(
            app(state),
            Method::GET,
            "/admin/users",
            String::new(),
            ADMIN,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&body).unwrap();
        for user in body["users"].as_array().unwrap() {
            assert!(user.get("password_hash").is_none());
        }
    }

    #[sqlx::test(fixtures("../../../fixtures/users.sql"))]
    async fn test_admin_rejects_wrong_credentials(pool: Pool<Sqlite>) {
        let state = router::state(pool);

        let response = make_request_with_headers(
            app(state.clone()),
            Method::GET,
            "/admin/users",
            String::new(),
            &[("x-username", "admin"), ("x-password", "admin124")],
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = make_request(
            app(state),
            Method::GET,
            "/admin/users",
            String::new(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
