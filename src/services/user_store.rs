use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::{NewUser, ScoreRecord, User};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with `BadRequest` when the email is already taken.
    async fn create(&self, new_user: NewUser) -> Result<User>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn scores(&self, user_id: Uuid) -> Result<Vec<ScoreRecord>>;
    /// Returns `false` when no user with `user_id` exists.
    async fn append_score(&self, user_id: Uuid, score: i32, total: i32) -> Result<bool>;
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                Error::BadRequest("User already exists".to_string())
            }
            other => Error::from(other),
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn scores(&self, user_id: Uuid) -> Result<Vec<ScoreRecord>> {
        let scores = sqlx::query_as::<_, ScoreRecord>(
            r#"
            SELECT score, total, taken_at AS date
            FROM user_scores
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(scores)
    }

    async fn append_score(&self, user_id: Uuid, score: i32, total: i32) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO user_scores (user_id, score, total)
            SELECT id, $2, $3 FROM users WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(score)
        .bind(total)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query("UPDATE users SET updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(true)
    }
}
