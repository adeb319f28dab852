//! # User Repository
//!
//! Lookups and registration for `users`.

use lightbnb_core::{NewUser, User};
use sqlx::PgPool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: PgPool) -> Self {
        UserRepository { pool }
    }

    /// Gets a user by email.
    ///
    /// An empty email is answered with `Ok(None)` without a round trip.
    pub async fn get_user_with_email(&self, email: &str) -> DbResult<Option<User>> {
        if email.is_empty() {
            return Ok(None);
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get_user_with_id(&self, id: i32) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Registers a user and returns the stored row.
    ///
    /// Fields are sent as given. `password` is stored as is; hashing belongs
    /// to the auth layer.
    ///
    /// ## Returns
    /// * `Ok(User)` - Inserted user with its generated id
    /// * `Err(DbError::UniqueViolation)` - Email already registered
    pub async fn add_user(&self, user: &NewUser) -> DbResult<User> {
        debug!(email = %user.email, "Inserting user");

        let inserted = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }
}
