mod repository;

pub use repository::*;

use serde::{Deserialize, Serialize};

/// Reminder as saved on database.
///
/// The message is a static snapshot taken at creation; it holds no live
/// link to the bill it mentions.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow,
)]
pub struct Reminder {
    pub reminder_id: i64,
    pub user_id: i64,
    pub message: String,
    pub reminder_date: String,
    pub created_at: chrono::NaiveDateTime,
}
