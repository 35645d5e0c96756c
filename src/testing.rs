//! In-memory store fakes for unit and router tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::types::Json;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::interview::{InterviewQuestion, InterviewRecord, InterviewRole};
use crate::models::user::{NewUser, ScoreRecord, User};
use crate::services::interview_store::InterviewStore;
use crate::services::user_store::UserStore;
use crate::utils::time::now;

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    scores: Mutex<HashMap<Uuid, Vec<ScoreRecord>>>,
}

impl MemoryUserStore {
    pub fn seed(&self, name: &str, email: &str) -> Uuid {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: String::new(),
            created_at: now(),
            updated_at: now(),
        };
        let id = user.id;
        self.users.lock().unwrap().push(user);
        id
    }

    pub fn score_count(&self) -> usize {
        self.scores.lock().unwrap().values().map(Vec::len).sum()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(Error::BadRequest("User already exists".to_string()));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now(),
            updated_at: now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn scores(&self, user_id: Uuid) -> Result<Vec<ScoreRecord>> {
        let scores = self.scores.lock().unwrap();
        Ok(scores.get(&user_id).cloned().unwrap_or_default())
    }

    async fn append_score(&self, user_id: Uuid, score: i32, total: i32) -> Result<bool> {
        if !self.users.lock().unwrap().iter().any(|u| u.id == user_id) {
            return Ok(false);
        }
        self.scores
            .lock()
            .unwrap()
            .entry(user_id)
            .or_default()
            .push(ScoreRecord {
                score,
                total,
                date: now(),
            });
        Ok(true)
    }
}

#[derive(Default)]
pub struct MemoryInterviewStore {
    records: Mutex<HashMap<(InterviewRole, NaiveDate), InterviewRecord>>,
}

impl MemoryInterviewStore {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl InterviewStore for MemoryInterviewStore {
    async fn find(&self, role: InterviewRole, date: NaiveDate) -> Result<Option<InterviewRecord>> {
        Ok(self.records.lock().unwrap().get(&(role, date)).cloned())
    }

    async fn insert_if_absent(
        &self,
        role: InterviewRole,
        date: NaiveDate,
        questions: Vec<InterviewQuestion>,
    ) -> Result<InterviewRecord> {
        let mut records = self.records.lock().unwrap();
        let record = records.entry((role, date)).or_insert_with(|| InterviewRecord {
            id: Uuid::new_v4(),
            role: role.as_str().to_string(),
            interview_date: date,
            questions: Json(questions),
            created_at: now(),
        });
        Ok(record.clone())
    }
}
