use sqlx::PgPool;

use crate::models::{CreateUser, User};

/// Column list for `users` queries.
const USER_COLUMNS: &str = "\
    user_id, created_at, active, email, first_name, last_name, password";

pub struct UserRepo;

impl UserRepo {
    /// Register a user without a password. A duplicate email fails with a
    /// `unique_email` violation and leaves the existing row untouched.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, first_name, last_name) \
             VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.email.trim())
            .bind(input.first_name.as_deref())
            .bind(input.last_name.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find an active user by ID.
    pub async fn find_by_id(pool: &PgPool, user_id: i32) -> Result<Option<User>, sqlx::Error> {
        let query =
            format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1 AND active = true");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active user by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query =
            format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1 AND active = true");
        sqlx::query_as::<_, User>(&query)
            .bind(email.trim())
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query =
            format!("SELECT {USER_COLUMNS} FROM users WHERE active = true ORDER BY user_id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }
}
