mod repository;

pub use repository::*;

use serde::{Deserialize, Serialize};

/// Utility as saved on database.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow,
)]
pub struct Utility {
    pub utility_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub provider_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
