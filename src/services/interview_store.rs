use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::interview::{InterviewQuestion, InterviewRecord, InterviewRole};

#[async_trait]
pub trait InterviewStore: Send + Sync {
    async fn find(&self, role: InterviewRole, date: NaiveDate) -> Result<Option<InterviewRecord>>;

    /// Stores `questions` for `(role, date)` unless a set already exists, and
    /// returns whichever set is stored afterwards.
    async fn insert_if_absent(
        &self,
        role: InterviewRole,
        date: NaiveDate,
        questions: Vec<InterviewQuestion>,
    ) -> Result<InterviewRecord>;
}

#[derive(Clone)]
pub struct PgInterviewStore {
    pool: PgPool,
}

impl PgInterviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewStore for PgInterviewStore {
    async fn find(&self, role: InterviewRole, date: NaiveDate) -> Result<Option<InterviewRecord>> {
        let record = sqlx::query_as::<_, InterviewRecord>(
            r#"
            SELECT id, role, interview_date, questions, created_at
            FROM interview_sets
            WHERE role = $1 AND interview_date = $2
            "#,
        )
        .bind(role.as_str())
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn insert_if_absent(
        &self,
        role: InterviewRole,
        date: NaiveDate,
        questions: Vec<InterviewQuestion>,
    ) -> Result<InterviewRecord> {
        let inserted = sqlx::query_as::<_, InterviewRecord>(
            r#"
            INSERT INTO interview_sets (id, role, interview_date, questions)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (role, interview_date) DO NOTHING
            RETURNING id, role, interview_date, questions, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(role.as_str())
        .bind(date)
        .bind(Json(questions))
        .fetch_optional(&self.pool)
        .await?;

        if let Some(record) = inserted {
            return Ok(record);
        }

        tracing::debug!(%role, %date, "interview set stored concurrently, reusing it");
        self.find(role, date).await?.ok_or_else(|| {
            Error::Internal(format!("Interview set for {} on {} vanished", role, date))
        })
    }
}
