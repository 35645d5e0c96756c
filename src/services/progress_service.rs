use std::sync::Arc;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::UserProfile;
use crate::services::user_store::UserStore;

#[derive(Clone)]
pub struct ProgressService {
    users: Arc<dyn UserStore>,
}

impl ProgressService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn save_score(&self, user_id: Uuid, score: i32, total: i32) -> Result<()> {
        if score < 0 || total < 0 {
            return Err(Error::BadRequest("Score and total must be non-negative".to_string()));
        }
        if !self.users.append_score(user_id, score, total).await? {
            return Err(Error::NotFound("User not found".to_string()));
        }
        tracing::info!(%user_id, score, total, "saved quiz score");
        Ok(())
    }

    pub async fn profile(&self, user_id: Uuid) -> Result<UserProfile> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;
        let scores = self.users.scores(user_id).await?;
        Ok(user.into_profile(scores))
    }
}
