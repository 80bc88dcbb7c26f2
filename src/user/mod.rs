mod repository;

pub use repository::*;

use serde::{Deserialize, Serialize};

/// User as saved on database.
///
/// The password hash never serializes, so no response can include it.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow,
)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    #[serde(skip)]
    pub password_hash: String,
    pub email: String,
    pub phone_number: String,
    pub pan: Option<String>,
    pub aadhaar: Option<String>,
    pub role: Role,
    pub created_at: chrono::NaiveDateTime,
}

/// Role of a [`User`], stored as lowercase text.
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
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Fields required to register a [`User`].
#[derive(Clone, Debug, Default)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub phone_number: String,
    pub pan: Option<String>,
    pub aadhaar: Option<String>,
    pub role: Role,
}
