//! SQLite persistence for the car catalog and user accounts.
//!
//! The schema is created on startup if missing. Dealer and review data is
//! never stored here; it lives in the dealer service and is only proxied.

pub mod cars;
pub mod users;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Open a SQLite pool for `database_url` and create the schema.
///
/// An in-memory database is pinned to a single pooled connection that never
/// idles out, since each SQLite `:memory:` connection is its own database.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    create_schema(&pool).await?;
    Ok(pool)
}

/// Create all tables if they do not exist.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS car_makes (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS car_models (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            car_make_id INTEGER NOT NULL
                        REFERENCES car_makes(id) ON DELETE CASCADE,
            name        TEXT NOT NULL,
            car_type    TEXT NOT NULL DEFAULT 'SEDAN',
            year        INTEGER NOT NULL DEFAULT 2025
                        CHECK (year BETWEEN 2015 AND 2050)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            username      TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            salt          TEXT NOT NULL,
            first_name    TEXT NOT NULL DEFAULT '',
            last_name     TEXT NOT NULL DEFAULT '',
            email         TEXT NOT NULL DEFAULT '',
            created_at    TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_pool_shares_one_database() {
        let pool = init_pool("sqlite::memory:").await.unwrap();

        sqlx::query("INSERT INTO car_makes (name) VALUES ('Acme')")
            .execute(&pool)
            .await
            .unwrap();

        // A second acquisition must still see the row.
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM car_makes")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let pool = init_pool("sqlite::memory:").await.unwrap();
        create_schema(&pool).await.unwrap();
        create_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn deleting_a_make_cascades_to_models() {
        let pool = init_pool("sqlite::memory:").await.unwrap();

        let make_id = cars::insert_make(&pool, "Acme", "test make").await.unwrap();
        cars::insert_model(&pool, make_id, "Runner", "SEDAN", 2024)
            .await
            .unwrap();

        sqlx::query("DELETE FROM car_makes WHERE id = ?")
            .bind(make_id)
            .execute(&pool)
            .await
            .unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM car_models")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn year_check_constraint_rejects_out_of_range() {
        let pool = init_pool("sqlite::memory:").await.unwrap();
        let make_id = cars::insert_make(&pool, "Acme", "").await.unwrap();
        let result = cars::insert_model(&pool, make_id, "Old", "SEDAN", 2012).await;
        assert!(result.is_err());
    }
}
