pub mod ai;
pub mod auth;
pub mod extract;
pub mod health;
pub mod interview;


use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::require_bearer_auth, AppState};

pub fn router(state: AppState) -> Router {
    let base_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health));

    let auth_api = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login));

    let account_api = Router::new()
        .route("/api/ai/save-score", post(ai::save_score))
        .route("/api/ai/profile", get(ai::profile))
        .layer(from_fn_with_state(state.clone(), require_bearer_auth));

    let ai_api = Router::new()
        .route("/api/ai/generate-mcqs", post(ai::generate_mcqs))
        .route("/api/ai/interview-chat", post(ai::interview_chat))
        .route("/api/ai/get-interview-review", post(ai::interview_review))
        .route("/api/ai/upload-resume", post(ai::upload_resume))
        .route("/api/ai/interview-questions", post(ai::interview_questions));

    let interview_api = Router::new()
        .route("/api/interview/generate", post(interview::generate))
        .route("/api/interview/evaluate", post(interview::evaluate));

    base_routes
        .merge(auth_api)
        .merge(account_api)
        .merge(ai_api)
        .merge(interview_api)
        .with_state(state)
}
