use std::sync::Arc;

use crate::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::{Error, Result};
use crate::middleware::auth::Claims;
use crate::models::user::NewUser;
use crate::services::user_store::UserStore;
use crate::utils::crypto::{hash_password, verify_password};
use crate::utils::token::TokenKeys;

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    keys: TokenKeys,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, keys: TokenKeys) -> Self {
        Self { users, keys }
    }

    pub async fn register(&self, payload: RegisterRequest) -> Result<AuthResponse> {
        let email = normalize_email(&payload.email);
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(Error::BadRequest("User already exists".to_string()));
        }

        let user = self
            .users
            .create(NewUser {
                name: payload.name.trim().to_string(),
                email,
                password_hash: hash_password(&payload.password)?,
            })
            .await?;
        tracing::info!(user_id = %user.id, "registered user");

        let token = self.keys.issue(user.id)?;
        Ok(AuthResponse {
            token,
            user: user.into_profile(Vec::new()),
        })
    }

    pub async fn login(&self, payload: LoginRequest) -> Result<AuthResponse> {
        let invalid = || Error::BadRequest("Invalid credentials".to_string());

        let email = normalize_email(&payload.email);
        let user = self.users.find_by_email(&email).await?.ok_or_else(invalid)?;
        if !verify_password(&payload.password, &user.password_hash) {
            tracing::warn!(user_id = %user.id, "login with wrong password");
            return Err(invalid());
        }

        let token = self.keys.issue(user.id)?;
        let scores = self.users.scores(user.id).await?;
        Ok(AuthResponse {
            token,
            user: user.into_profile(scores),
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        self.keys.verify(token)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
