mod repository;

pub use repository::*;

use serde::{Deserialize, Serialize};

/// Payment as saved on database.
///
/// Amount and method are immutable after creation; only `status` may change
/// post hoc.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow,
)]
pub struct Payment {
    pub payment_id: i64,
    pub bill_id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub payment_method: String,
    pub status: PaymentStatus,
    pub transaction_date: chrono::NaiveDateTime,
}

/// Status of a [`Payment`], stored as lowercase text.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Completed,
    Failed,
    Pending,
}
