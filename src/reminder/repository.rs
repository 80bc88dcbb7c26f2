//! Handle database requests.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::reminder::Reminder;

#[derive(Clone)]
pub struct ReminderRepository {
    pool: SqlitePool,
}

impl ReminderRepository {
    /// Create a new [`ReminderRepository`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a reminder into database, returning the new id.
    pub async fn insert(
        &self,
        user_id: i64,
        message: &str,
        reminder_date: &str,
    ) -> Result<i64> {
        let reminder_id = sqlx::query_scalar(
            r#"INSERT INTO reminders (user_id, message, reminder_date, created_at)
                VALUES (?1, ?2, ?3, ?4) RETURNING reminder_id"#,
        )
        .bind(user_id)
        .bind(message)
        .bind(reminder_date)
        .bind(chrono::Utc::now().naive_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(reminder_id)
    }

    /// Reminders of one user, earliest first.
    pub async fn by_user(&self, user_id: i64) -> Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, Reminder>(
            r#"SELECT * FROM reminders WHERE user_id = ?1 ORDER BY reminder_date ASC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reminders)
    }

    /// Delete a reminder.
    pub async fn delete(&self, reminder_id: i64) -> Result<u64> {
        let result =
            sqlx::query(r#"DELETE FROM reminders WHERE reminder_id = ?1"#)
                .bind(reminder_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }
}
