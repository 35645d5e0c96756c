use chrono::NaiveDate;
use rand::seq::SliceRandom;
use std::sync::Arc;

use crate::error::Result;
use crate::models::interview::{InterviewQuestion, InterviewRole};
use crate::services::interview_store::InterviewStore;
use crate::services::question_bank::daily_bank;

pub const DAILY_SET_SIZE: usize = 4;

#[derive(Clone)]
pub struct InterviewService {
    store: Arc<dyn InterviewStore>,
}

impl InterviewService {
    pub fn new(store: Arc<dyn InterviewStore>) -> Self {
        Self { store }
    }

    /// Returns the question set for `role` on `date`, drawing and storing a
    /// fresh one the first time the pair is requested.
    pub async fn questions_for_day(
        &self,
        role: InterviewRole,
        date: NaiveDate,
    ) -> Result<Vec<InterviewQuestion>> {
        if let Some(existing) = self.store.find(role, date).await? {
            tracing::debug!(%role, %date, "serving cached interview set");
            return Ok(existing.questions.0);
        }

        let questions = draw_questions(role);
        let stored = self.store.insert_if_absent(role, date, questions).await?;
        tracing::info!(%role, %date, "stored new interview set");
        Ok(stored.questions.0)
    }
}

fn draw_questions(role: InterviewRole) -> Vec<InterviewQuestion> {
    let mut pool: Vec<InterviewQuestion> = daily_bank(role).iter().map(Into::into).collect();
    pool.shuffle(&mut rand::thread_rng());
    pool.truncate(DAILY_SET_SIZE);
    pool
}
