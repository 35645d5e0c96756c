use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    routes::extract::AppJson,
    dto::auth_dto::{LoginRequest, RegisterRequest},
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    AppJson(mut payload): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse> {
    payload.name = payload.name.trim().to_string();
    payload.email = payload.email.trim().to_string();
    payload.validate()?;

    let response = state.auth_service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<impl IntoResponse> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(Error::BadRequest("Email and password required".to_string()));
    }

    let response = state.auth_service.login(payload).await?;
    Ok(Json(response))
}
