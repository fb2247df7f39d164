//! User account storage.

use sqlx::{FromRow, SqlitePool};

/// A stored user account.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Fields required to create an account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Look up an account by username.
pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(
        r#"
        SELECT id, username, password_hash, salt, first_name, last_name, email
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Outcome of an account creation attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateUserOutcome {
    /// The account was created with this id.
    Created(i64),
    /// The username is already taken.
    AlreadyExists,
}

/// Create an account, reporting a taken username as
/// [`CreateUserOutcome::AlreadyExists`] rather than an error.
pub async fn create_user(
    pool: &SqlitePool,
    user: &NewUser,
) -> Result<CreateUserOutcome, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (username, password_hash, salt, first_name, last_name, email)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.salt)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .execute(pool)
    .await;

    match result {
        Ok(done) => Ok(CreateUserOutcome::Created(done.last_insert_rowid())),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Ok(CreateUserOutcome::AlreadyExists)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{hash_password, new_salt};
    use crate::db::init_pool;

    fn sample_user(username: &str) -> NewUser {
        let salt = new_salt();
        NewUser {
            username: username.to_string(),
            password_hash: hash_password("hunter2", &salt),
            salt,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_find() {
        let pool = init_pool("sqlite::memory:").await.unwrap();

        let outcome = create_user(&pool, &sample_user("ada")).await.unwrap();
        assert!(matches!(outcome, CreateUserOutcome::Created(_)));

        let found = find_by_username(&pool, "ada").await.unwrap().unwrap();
        assert_eq!(found.username, "ada");
        assert_eq!(found.first_name, "Ada");

        assert!(find_by_username(&pool, "grace").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_reports_already_exists() {
        let pool = init_pool("sqlite::memory:").await.unwrap();

        create_user(&pool, &sample_user("ada")).await.unwrap();
        let outcome = create_user(&pool, &sample_user("ada")).await.unwrap();
        assert_eq!(outcome, CreateUserOutcome::AlreadyExists);
    }
}
