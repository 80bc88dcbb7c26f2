//! Handle database requests.
//!
//! Payment rows are only ever created through the [`crate::ledger::Ledger`].

use sqlx::SqlitePool;

use crate::error::Result;
use crate::payment::{Payment, PaymentStatus};

#[derive(Clone)]
pub struct PaymentRepository {
    pool: SqlitePool,
}

impl PaymentRepository {
    /// Create a new [`PaymentRepository`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a payment using the `payment_id` field.
    pub async fn find_by_id(&self, payment_id: i64) -> Result<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"SELECT * FROM payments WHERE payment_id = ?1"#,
        )
        .bind(payment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(payment)
    }

    /// Payments made by one user, most recent first.
    pub async fn by_user(&self, user_id: i64) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"SELECT * FROM payments WHERE user_id = ?1 ORDER BY transaction_date DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    /// Payments applied against one bill, most recent first.
    pub async fn by_bill(&self, bill_id: i64) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"SELECT * FROM payments WHERE bill_id = ?1 ORDER BY transaction_date DESC"#,
        )
        .bind(bill_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    /// Update the only mutable field of a payment.
    pub async fn update_status(
        &self,
        payment_id: i64,
        status: PaymentStatus,
    ) -> Result<u64> {
        let result = sqlx::query(
            r#"UPDATE payments SET status = ?1 WHERE payment_id = ?2"#,
        )
        .bind(status)
        .bind(payment_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a payment.
    pub async fn delete(&self, payment_id: i64) -> Result<u64> {
        let result =
            sqlx::query(r#"DELETE FROM payments WHERE payment_id = ?1"#)
                .bind(payment_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    /// All payments, for the admin listing.
    pub async fn all(&self) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"SELECT * FROM payments ORDER BY payment_id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }
}
