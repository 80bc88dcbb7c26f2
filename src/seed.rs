//! Demonstration data for a fresh instance.

use crate::bill::BillRepository;
use crate::crypto::PasswordManager;
use crate::database::Database;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::payment::PaymentStatus;
use crate::reminder::ReminderRepository;
use crate::user::{NewUser, Role, UserRepository};
use crate::utility::UtilityRepository;

/// Delete every row and re-insert the demonstration data set.
///
/// Rows are deleted children-first so foreign keys stay satisfied. Ids are
/// not reset, so inserted rows are wired up through the returned ids.
pub async fn reset_demo(db: &Database, crypto: &PasswordManager) -> Result<()> {
    let pool = &db.sqlite;

    for table in ["payments", "reminders", "bills", "utilities", "users"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(pool)
            .await?;
    }

    let users = UserRepository::new(pool.clone());
    let mut user_ids = Vec::new();
    for (username, password, email, phone_number, pan, aadhaar, role) in [
        ("john_doe", "password123", "john@example.com", "9876543210", "ABCDE1234F", "123456789012", Role::User),
        ("alice_smith", "adminpass", "alice@example.com", "9876543211", "ABCDE5678G", "123456789013", Role::Admin),
        ("bob_jones", "password123", "bob@example.com", "9876543212", "ABCDE9012H", "123456789014", Role::User),
        ("carol_white", "password123", "carol@example.com", "9876543213", "ABCDE3456J", "123456789015", Role::User),
        ("david_black", "password123", "david@example.com", "9876543214", "ABCDE7890K", "123456789016", Role::User),
    ] {
        let user_id = users
            .insert(&NewUser {
                username: username.to_owned(),
                password_hash: crypto.hash_password(password)?,
                email: email.to_owned(),
                phone_number: phone_number.to_owned(),
                pan: Some(pan.to_owned()),
                aadhaar: Some(aadhaar.to_owned()),
                role,
            })
            .await?;
        user_ids.push(user_id);
    }

    let utilities = UtilityRepository::new(pool.clone());
    let mut utility_ids = Vec::new();
    for (name, description, provider_name) in [
        ("Electricity", "Electricity supply for the city", "XYZ Power Co."),
        ("Water", "Water supply for households", "ABC Water Works"),
        ("Water", "Water supply for households", "DEF Water Solutions"),
        ("Gas", "Natural gas supply for homes", "DEF Gas Ltd."),
    ] {
        utility_ids.push(utilities.insert(name, description, provider_name).await?);
    }

    let bills = BillRepository::new(pool.clone());
    let mut bill_ids = Vec::new();
    for (user, utility, amount, due_date) in [
        (0, 0, 120.5, "2025-12-15"),
        (1, 1, 75.0, "2025-12-10"),
        (1, 0, 100.0, "2026-01-01"),
        (2, 2, 60.0, "2025-12-20"),
        (3, 0, 50.0, "2025-12-18"),
        (4, 1, 90.0, "2025-12-16"),
    ] {
        bill_ids.push(
            bills
                .insert(user_ids[user], utility_ids[utility], amount, due_date)
                .await?,
        );
    }

    // One settled bill, recorded through the loose path.
    Ledger::new(pool.clone())
        .add_payment(
            bill_ids[0],
            user_ids[0],
            120.5,
            "credit_card",
            PaymentStatus::Completed,
        )
        .await?;

    let reminders = ReminderRepository::new(pool.clone());
    for (user, message, reminder_date) in [
        (0, "Pay electricity bill by 2025-12-15", "2025-12-14"),
        (1, "Pay water bill by 2025-12-10", "2025-12-09"),
        (2, "Pay gas bill by 2025-12-20", "2025-12-19"),
    ] {
        reminders
            .insert(user_ids[user], message, reminder_date)
            .await?;
    }

    tracing::info!("demonstration data seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use sqlx::{Pool, Sqlite};

    use super::*;
    use crate::config::Argon2;

    #[sqlx::test]
    async fn test_reset_demo_is_repeatable(pool: Pool<Sqlite>) {
        let db = Database { sqlite: pool.clone() };
        let crypto = PasswordManager::new(Some(Argon2 {
            memory_cost: 1024,
            iterations: 1,
            parallelism: 1,
            hash_length: 32,
        }))
        .unwrap();

        reset_demo(&db, &crypto).await.unwrap();
        reset_demo(&db, &crypto).await.unwrap();

        let users: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM users"#)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(users, 5);

        let paid: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM bills WHERE status = 'paid'"#,
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(paid, 1);

        let payments: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM payments"#)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(payments, 1);
    }
}
