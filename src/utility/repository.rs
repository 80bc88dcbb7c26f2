//! Handle database requests.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::Result;
use crate::utility::Utility;

#[derive(Clone)]
pub struct UtilityRepository {
    pool: SqlitePool,
}

impl UtilityRepository {
    /// Create a new [`UtilityRepository`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a utility into database, returning the new id.
    pub async fn insert(
        &self,
        name: &str,
        description: &str,
        provider_name: &str,
    ) -> Result<i64> {
        let utility_id = sqlx::query_scalar(
            r#"INSERT INTO utilities (name, description, provider_name, created_at)
                VALUES (?1, ?2, ?3, ?4) RETURNING utility_id"#,
        )
        .bind(name)
        .bind(description)
        .bind(provider_name)
        .bind(chrono::Utc::now().naive_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(utility_id)
    }

    /// All utilities.
    pub async fn all(&self) -> Result<Vec<Utility>> {
        let utilities = sqlx::query_as::<_, Utility>(
            r#"SELECT * FROM utilities ORDER BY utility_id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(utilities)
    }

    /// Find a utility using the `utility_id` field.
    pub async fn find_by_id(&self, utility_id: i64) -> Result<Option<Utility>> {
        let utility = sqlx::query_as::<_, Utility>(
            r#"SELECT * FROM utilities WHERE utility_id = ?1"#,
        )
        .bind(utility_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(utility)
    }

    /// Partial update. Callers must pass at least one field.
    pub async fn update(
        &self,
        utility_id: i64,
        name: Option<&str>,
        description: Option<&str>,
        provider_name: Option<&str>,
    ) -> Result<u64> {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE utilities SET ");
        let mut fields = query.separated(", ");

        if let Some(name) = name {
            fields.push("name = ").push_bind_unseparated(name);
        }
        if let Some(description) = description {
            fields
                .push("description = ")
                .push_bind_unseparated(description);
        }
        if let Some(provider_name) = provider_name {
            fields
                .push("provider_name = ")
                .push_bind_unseparated(provider_name);
        }

        query.push(" WHERE utility_id = ").push_bind(utility_id);

        Ok(query.build().execute(&self.pool).await?.rows_affected())
    }

    /// Delete a utility.
    pub async fn delete(&self, utility_id: i64) -> Result<u64> {
        let result =
            sqlx::query(r#"DELETE FROM utilities WHERE utility_id = ?1"#)
                .bind(utility_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }
}
