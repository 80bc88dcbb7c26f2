use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::Result;
use crate::reminder::{Reminder, ReminderRepository};

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub reminders: Vec<Reminder>,
}

/// Handler to list a user's reminders, earliest first.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Response>> {
    let reminders = ReminderRepository::new(state.db.sqlite.clone())
        .by_user(user_id)
        .await?;

    Ok(Json(Response { reminders }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use sqlx::{Pool, Sqlite};

    use super::*;
    use crate::*;

    #[sqlx::test(fixtures(
        "../../../fixtures/users.sql",
        "../../../fixtures/reminders.sql"
    ))]
    async fn test_list_handler(pool: Pool<Sqlite>) {
        let app = app(router::state(pool));

        let response =
            make_request(app, Method::GET, "/users/1/reminders", String::new())
                .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Response = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.reminders.len(), 1);
        assert_eq!(body.reminders[0].reminder_date, "2025-12-14");
    }

    #[sqlx::test(fixtures(
        "../../../fixtures/users.sql",
        "../../../fixtures/reminders.sql"
    ))]
    async fn test_list_without_reminders_is_empty(pool: Pool<Sqlite>) {
        let app = app(router::state(pool));

        let response =
            make_request(app, Method::GET, "/users/4/reminders", String::new())
                .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Response = serde_json::from_slice(&body).unwrap();
        assert!(body.reminders.is_empty());
    }
}
