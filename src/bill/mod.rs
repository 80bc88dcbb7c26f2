mod repository;

pub use repository::*;

use serde::{Deserialize, Serialize};

/// Bill as saved on database.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow,
)]
pub struct Bill {
    pub bill_id: i64,
    pub user_id: i64,
    pub utility_id: i64,
    pub amount: f64,
    pub due_date: String,
    pub status: BillStatus,
    pub created_at: chrono::NaiveDateTime,
}

/// Status of a [`Bill`], stored as lowercase text.
///
/// The ledger only moves `pending` to `paid`; the reverse transition exists
/// solely through the explicit admin bill update.
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
pub enum BillStatus {
    #[default]
    Pending,
    Paid,
}

/// Listing shape for bills: the bill plus the joined utility identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BillOverview {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub bill: Bill,
    pub utility_name: String,
    pub provider_name: Option<String>,
}
