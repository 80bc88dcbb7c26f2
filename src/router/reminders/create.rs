use axum::extract::State;
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ServerError;
use crate::AppState;
use crate::bill::BillRepository;
use crate::error::Result;
use crate::reminder::ReminderRepository;
use crate::router::Valid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    pub user_id: i64,
    pub bill_id: i64,
    #[validate(length(min = 1, max = 30, message = "Reminder date is required."))]
    pub reminder_date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub reminder_id: i64,
}

/// Handler to schedule a payment reminder. The message is derived from
/// the bill at creation time and never revisited.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<Response>)> {
    let bill = BillRepository::new(state.db.sqlite.clone())
        .find_by_id(body.bill_id)
        .await?
        .ok_or(ServerError::NotFound("Bill"))?;

    let message = format!(
        "Reminder to pay Bill ID {} (Amount: {}) by {}",
        bill.bill_id, bill.amount, bill.due_date
    );

    let reminder_id = ReminderRepository::new(state.db.sqlite.clone())
        .insert(body.user_id, &message, &body.reminder_date)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Response {
            message: "Reminder created successfully".to_owned(),
            reminder_id,
        }),
    ))
}
