//! Handle database requests.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::bill::{Bill, BillOverview, BillStatus};
use crate::error::Result;

const OVERVIEW_QUERY: &str = r#"SELECT
        b.*,
        u.name AS utility_name,
        u.provider_name AS provider_name
    FROM bills b
    JOIN utilities u ON b.utility_id = u.utility_id"#;

#[derive(Clone)]
pub struct BillRepository {
    pool: SqlitePool,
}

impl BillRepository {
    /// Create a new [`BillRepository`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a pending bill into database, returning the new id.
    pub async fn insert(
        &self,
        user_id: i64,
        utility_id: i64,
        amount: f64,
        due_date: &str,
    ) -> Result<i64> {
        let bill_id = sqlx::query_scalar(
            r#"INSERT INTO bills (user_id, utility_id, amount, due_date, status, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING bill_id"#,
        )
        .bind(user_id)
        .bind(utility_id)
        .bind(amount)
        .bind(due_date)
        .bind(BillStatus::Pending)
        .bind(chrono::Utc::now().naive_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(bill_id)
    }

    /// Find a bill using the `bill_id` field.
    pub async fn find_by_id(&self, bill_id: i64) -> Result<Option<Bill>> {
        let bill =
            sqlx::query_as::<_, Bill>(r#"SELECT * FROM bills WHERE bill_id = ?1"#)
                .bind(bill_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(bill)
    }

    /// Bills of one user, joined with the utility, soonest due first.
    pub async fn by_user(
        &self,
        user_id: i64,
        status: Option<BillStatus>,
    ) -> Result<Vec<BillOverview>> {
        let mut query = QueryBuilder::<Sqlite>::new(OVERVIEW_QUERY);
        query.push(" WHERE b.user_id = ").push_bind(user_id);

        if let Some(status) = status {
            query.push(" AND b.status = ").push_bind(status);
        }

        query.push(" ORDER BY b.due_date ASC");

        let bills = query
            .build_query_as::<BillOverview>()
            .fetch_all(&self.pool)
            .await?;

        Ok(bills)
    }

    /// All bills, for the admin listing. Same shape as the user listing.
    pub async fn all(&self) -> Result<Vec<BillOverview>> {
        let mut query = QueryBuilder::<Sqlite>::new(OVERVIEW_QUERY);
        query.push(" ORDER BY b.bill_id");

        let bills = query
            .build_query_as::<BillOverview>()
            .fetch_all(&self.pool)
            .await?;

        Ok(bills)
    }

    /// Partial update. Callers must pass at least one field.
    ///
    /// No transition validation: setting a paid bill back to `pending` is
    /// the documented admin override, bypassing the ledger.
    pub async fn update(
        &self,
        bill_id: i64,
        amount: Option<f64>,
        due_date: Option<&str>,
        status: Option<BillStatus>,
    ) -> Result<u64> {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE bills SET ");
        let mut fields = query.separated(", ");

        if let Some(amount) = amount {
            fields.push("amount = ").push_bind_unseparated(amount);
        }
        if let Some(due_date) = due_date {
            fields.push("due_date = ").push_bind_unseparated(due_date);
        }
        if let Some(status) = status {
            fields.push("status = ").push_bind_unseparated(status);
        }

        query.push(" WHERE bill_id = ").push_bind(bill_id);

        Ok(query.build().execute(&self.pool).await?.rows_affected())
    }

    /// Delete a bill.
    pub async fn delete(&self, bill_id: i64) -> Result<u64> {
        let result = sqlx::query(r#"DELETE FROM bills WHERE bill_id = ?1"#)
            .bind(bill_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
