//! Bill and payment consistency logic.
//!
//! A bill is `paid` exactly when a completed payment has been recorded
//! against it. The two writes (insert payment, flip bill status) always
//! share one transaction, so a failure partway leaves no orphaned payment.

use sqlx::SqlitePool;
use thiserror::Error;

use crate::payment::{Payment, PaymentStatus};

const DEFAULT_METHOD: &str = "online";

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Bill not found")]
    BillNotFound,

    #[error("Bill already paid")]
    AlreadyPaid,

    #[error("Payment amount must be a positive number")]
    NonPositiveAmount,

    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}

/// Single-writer ledger over the bills and payments tables.
pub struct Ledger {
    pool: SqlitePool,
}

impl Ledger {
    /// Create a new [`Ledger`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Strict payment recording.
    ///
    /// Fails without writing anything when the amount is not a positive
    /// number, the bill does not exist, or the bill is already paid.
    /// On success exactly one more completed payment exists for the bill
    /// and the bill is `paid`.
    pub async fn record_payment(
        &self,
        user_id: i64,
        bill_id: i64,
        amount: f64,
    ) -> Result<Payment, LedgerError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::NonPositiveAmount);
        }

        let mut tx = self.pool.begin().await?;

        // Compare-and-swap on the status, so two concurrent calls cannot
        // both observe `pending`: at most one sees an affected row.
        let updated = sqlx::query(
            r#"UPDATE bills SET status = 'paid' WHERE bill_id = ?1 AND status = 'pending'"#,
        )
        .bind(bill_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            let known: Option<i64> =
                sqlx::query_scalar(r#"SELECT bill_id FROM bills WHERE bill_id = ?1"#)
                    .bind(bill_id)
                    .fetch_optional(&mut *tx)
                    .await?;

            return Err(match known {
                Some(_) => LedgerError::AlreadyPaid,
                None => LedgerError::BillNotFound,
            });
        }

        let payment = sqlx::query_as::<_, Payment>(
            r#"INSERT INTO payments (bill_id, user_id, amount, payment_method, status, transaction_date)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING *"#,
        )
        .bind(bill_id)
        .bind(user_id)
        .bind(amount)
        .bind(DEFAULT_METHOD)
        .bind(PaymentStatus::Completed)
        .bind(chrono::Utc::now().naive_utc())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(bill_id, payment_id = payment.payment_id, "payment recorded");
        Ok(payment)
    }

    /// Loose payment creation used by the general payment endpoint.
    ///
    /// Does not check the bill's current status: a completed payment marks
    /// the bill `paid` regardless of prior state, silently tolerating a
    /// double payment. A nonexistent bill or user surfaces as a foreign-key
    /// error.
    pub async fn add_payment(
        &self,
        bill_id: i64,
        user_id: i64,
        amount: f64,
        method: &str,
        status: PaymentStatus,
    ) -> Result<i64, LedgerError> {
        let mut tx = self.pool.begin().await?;

        let payment_id: i64 = sqlx::query_scalar(
            r#"INSERT INTO payments (bill_id, user_id, amount, payment_method, status, transaction_date)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING payment_id"#,
        )
        .bind(bill_id)
        .bind(user_id)
        .bind(amount)
        .bind(method)
        .bind(status)
        .bind(chrono::Utc::now().naive_utc())
        .fetch_one(&mut *tx)
        .await?;

        if status == PaymentStatus::Completed {
            sqlx::query(r#"UPDATE bills SET status = 'paid' WHERE bill_id = ?1"#)
                .bind(bill_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::info!(bill_id, payment_id, ?status, "payment added");
        Ok(payment_id)
    }
}
