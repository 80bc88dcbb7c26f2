//! Handle database requests.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::Result;
use crate::user::{NewUser, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new [`UserRepository`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert [`NewUser`] into database, returning the new id.
    pub async fn insert(&self, user: &NewUser) -> Result<i64> {
        let user_id = sqlx::query_scalar(
            r#"INSERT INTO users (username, password_hash, email, phone_number, pan, aadhaar, role, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING user_id"#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.pan)
        .bind(&user.aadhaar)
        .bind(user.role)
        .bind(chrono::Utc::now().naive_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(user_id)
    }

    /// Find a user using the `user_id` field.
    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<User>> {
        let user =
            sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE user_id = ?1"#)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }

    /// Find a user using the `username` field.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT * FROM users WHERE username = ?1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Partial update of the mutable contact fields.
    ///
    /// Callers must pass at least one field.
    pub async fn update_contact(
        &self,
        user_id: i64,
        email: Option<&str>,
        phone_number: Option<&str>,
    ) -> Result<u64> {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE users SET ");
        let mut fields = query.separated(", ");

        if let Some(email) = email {
            fields.push("email = ").push_bind_unseparated(email);
        }
        if let Some(phone_number) = phone_number {
            fields
                .push("phone_number = ")
                .push_bind_unseparated(phone_number);
        }

        query.push(" WHERE user_id = ").push_bind(user_id);

        Ok(query.build().execute(&self.pool).await?.rows_affected())
    }

    /// All users, for the admin listing.
    pub async fn all(&self) -> Result<Vec<User>> {
        let users =
            sqlx::query_as::<_, User>(r#"SELECT * FROM users ORDER BY user_id"#)
                .fetch_all(&self.pool)
                .await?;

        Ok(users)
    }
}
