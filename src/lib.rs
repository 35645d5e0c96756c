pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

use crate::config::Config;
use crate::services::{
    ai_service::AIService,
    auth_service::AuthService,
    interview_service::InterviewService,
    interview_store::PgInterviewStore,
    progress_service::ProgressService,
    user_store::{PgUserStore, UserStore},
};
use crate::utils::token::TokenKeys;
use reqwest::Client;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub progress_service: ProgressService,
    pub interview_service: InterviewService,
    pub ai_service: AIService,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> error::Result<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;

        let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool.clone()));
        let keys = TokenKeys::new(&config.jwt_secret, config.token_ttl_hours);

        Ok(Self {
            auth_service: AuthService::new(users.clone(), keys),
            progress_service: ProgressService::new(users),
            interview_service: InterviewService::new(Arc::new(PgInterviewStore::new(pool))),
            ai_service: AIService::from_api_key(config.openai_api_key.clone(), http_client),
        })
    }
}
