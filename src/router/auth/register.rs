use axum::extract::State;
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ServerError;
use crate::AppState;
use crate::error::Result;
use crate::router::Valid;
use crate::user::{NewUser, Role, UserRepository};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(
        min = 2,
        max = 30,
        message = "Username must be 2 to 30 characters long."
    ))]
    pub username: String,
    #[validate(email(message = "Email must be formatted."))]
    pub email: String,
    #[validate(length(
        min = 4,
        max = 20,
        message = "Phone number must be 4 to 20 characters long."
    ))]
    pub phone_number: String,
    #[validate(length(
        min = 8,
        max = 255,
        message = "Password must contain at least 8 characters."
    ))]
    pub password: String,
    #[validate(custom(
        function = "crate::router::validate_pan",
        message = "Invalid PAN format."
    ))]
    pub pan: Option<String>,
    #[validate(custom(
        function = "crate::router::validate_aadhaar",
        message = "Invalid Aadhaar format."
    ))]
    pub aadhaar: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Handler to register a user.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<Response>)> {
    let user = NewUser {
        username: body.username,
        password_hash: state.crypto.hash_password(&body.password)?,
        email: body.email,
        phone_number: body.phone_number,
        pan: body.pan,
        aadhaar: body.aadhaar,
        // self-registration never grants privileges.
        role: Role::User,
    };

    UserRepository::new(state.db.sqlite.clone())
        .insert(&user)
        .await
        .map_err(conflict)?;

    tracing::info!(username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(Response {
            message: format!("User {} registered successfully.", user.username),
        }),
    ))
}

fn conflict(err: ServerError) -> ServerError {
    match err {
        ServerError::Sql(sql)
            if sql
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation()) =>
        {
            ServerError::Conflict(
                "Username, PAN, or Aadhaar already exists.".to_owned(),
            )
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::{Pool, Sqlite};

    use super::*;
    use crate::*;

    fn body(username: &str, pan: Option<&str>) -> String {
        json!({
            "username": username,
            "email": "new@example.com",
            "phone_number": "9876500000",
            "password": "password123",
            "pan": pan,
            "aadhaar": null,
        })
        .to_string()
    }

    #[sqlx::test]
    async fn test_register_handler(pool: Pool<Sqlite>) {
        let app = app(router::state(pool.clone()));

        let response = make_request(
            app,
            Method::POST,
            "/auth/register",
            body("new_user", None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let role: String =
            sqlx::query_scalar(r#"SELECT role FROM users WHERE username = 'new_user'"#)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(role, "user");

        let hash: String = sqlx::query_scalar(
            r#"SELECT password_hash FROM users WHERE username = 'new_user'"#,
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[sqlx::test(fixtures("../../../fixtures/users.sql"))]
    async fn test_register_duplicate_username(pool: Pool<Sqlite>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::POST,
            "/auth/register",
            body("john_doe", None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[sqlx::test]
    async fn test_register_invalid_pan(pool: Pool<Sqlite>) {
        let app = app(router::state(pool.clone()));

        let response = make_request(
            app,
            Method::POST,
            "/auth/register",
            body("pan_user", Some("1234ABCDE")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let users: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM users"#)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(users, 0);
    }

    #[sqlx::test]
    async fn test_register_missing_field(pool: Pool<Sqlite>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::POST,
            "/auth/register",
            json!({ "username": "incomplete" }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
